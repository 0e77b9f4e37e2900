//! File-based Record Storage Adapter
//!
//! Stores the assessment record as a single JSON document under a fixed
//! namespace file in the configured data directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::assessment::PersistedAssessment;
use crate::ports::{RecordStorage, RecordStorageError};

/// Fixed namespace for the durable assessment record.
const RECORD_FILE: &str = "prakriti.json";

/// File-based storage for the assessment record.
#[derive(Debug, Clone)]
pub struct FileRecordStorage {
    base_path: PathBuf,
}

impl FileRecordStorage {
    /// Create a file storage rooted at a data directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self) -> PathBuf {
        self.base_path.join(RECORD_FILE)
    }
}

#[async_trait]
impl RecordStorage for FileRecordStorage {
    async fn load(&self) -> Result<Option<PersistedAssessment>, RecordStorageError> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| RecordStorageError::Io(e.to_string()))?;

        let document = serde_json::from_str(&json)
            .map_err(|e| RecordStorageError::DeserializationFailed(e.to_string()))?;

        Ok(Some(document))
    }

    async fn save(&self, document: &PersistedAssessment) -> Result<(), RecordStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| RecordStorageError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| RecordStorageError::SerializationFailed(e.to_string()))?;

        fs::write(self.record_path(), json)
            .await
            .map_err(|e| RecordStorageError::Io(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RecordStorageError> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path)
            .await
            .map_err(|e| RecordStorageError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{
        classify, score_answers, Answer, AnswerSet, AssessmentRecord,
    };
    use crate::domain::foundation::{Dosha, Timestamp};
    use tempfile::TempDir;

    fn finalized_document() -> PersistedAssessment {
        let mut answers = AnswerSet::new();
        answers.record("q1", Answer::new("thin", Dosha::Vata, 1));
        answers.record("q2", Answer::new("warm", Dosha::Pitta, 1));
        let scores = score_answers(&answers);
        AssessmentRecord {
            classification: classify(&scores).unwrap(),
            scores,
            answers,
            assessed_at: Timestamp::now(),
        }
        .to_persisted()
    }

    #[tokio::test]
    async fn load_on_fresh_directory_returns_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileRecordStorage::new(dir.path());

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips_the_document() {
        let dir = TempDir::new().unwrap();
        let storage = FileRecordStorage::new(dir.path());

        let document = finalized_document();
        storage.save(&document).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded, document);
    }

    #[tokio::test]
    async fn save_creates_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("wellness");
        let storage = FileRecordStorage::new(&nested);

        storage.save(&finalized_document()).await.unwrap();
        assert!(nested.join("prakriti.json").exists());
    }

    #[tokio::test]
    async fn clear_removes_the_document() {
        let dir = TempDir::new().unwrap();
        let storage = FileRecordStorage::new(dir.path());

        storage.save(&finalized_document()).await.unwrap();
        storage.clear().await.unwrap();

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_on_empty_storage_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let storage = FileRecordStorage::new(dir.path());

        assert!(storage.clear().await.is_ok());
    }

    #[tokio::test]
    async fn corrupted_document_surfaces_as_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let storage = FileRecordStorage::new(dir.path());

        std::fs::write(dir.path().join("prakriti.json"), "{not json at all").unwrap();

        let result = storage.load().await;
        assert!(matches!(
            result,
            Err(RecordStorageError::DeserializationFailed(_))
        ));
    }
}
