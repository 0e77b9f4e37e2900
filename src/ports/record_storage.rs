//! Record Storage Port - durable persistence for the assessment record.
//!
//! One document under a fixed namespace key. Backends are pluggable
//! (file, embedded store, browser-equivalent) so the pure scoring and
//! classification core stays testable without any I/O.

use async_trait::async_trait;

use crate::domain::assessment::PersistedAssessment;

/// Errors that can occur during record storage operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordStorageError {
    #[error("Failed to serialize assessment record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize assessment record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for persisting and loading the assessment record.
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Load the stored document.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet. A
    /// deserialization failure is an error here; the assessment store
    /// converts it into the empty initial state.
    async fn load(&self) -> Result<Option<PersistedAssessment>, RecordStorageError>;

    /// Save the document, replacing any previous version.
    async fn save(&self, document: &PersistedAssessment) -> Result<(), RecordStorageError>;

    /// Remove the stored document. Succeeds when nothing is stored.
    async fn clear(&self) -> Result<(), RecordStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_category() {
        let err = RecordStorageError::SerializationFailed("bad value".to_string());
        assert!(err.to_string().contains("serialize"));

        let err = RecordStorageError::DeserializationFailed("truncated".to_string());
        assert!(err.to_string().contains("deserialize"));

        let err = RecordStorageError::Io("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}
