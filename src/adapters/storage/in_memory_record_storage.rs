//! In-Memory Record Storage Adapter
//!
//! Stores the assessment record in memory. Useful for testing and
//! development; supports injecting a failure for the next operation to
//! exercise error paths.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::PersistedAssessment;
use crate::ports::{RecordStorage, RecordStorageError};

/// In-memory storage for the assessment record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStorage {
    document: Arc<RwLock<Option<PersistedAssessment>>>,
    next_error: Arc<RwLock<Option<RecordStorageError>>>,
}

impl InMemoryRecordStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage preloaded with a document.
    pub fn with_document(document: PersistedAssessment) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document))),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Arrange for the next operation to fail with the given error.
    pub async fn fail_next(&self, error: RecordStorageError) {
        *self.next_error.write().await = Some(error);
    }

    /// True when a document is currently stored.
    pub async fn has_document(&self) -> bool {
        self.document.read().await.is_some()
    }

    async fn take_injected_error(&self) -> Option<RecordStorageError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl RecordStorage for InMemoryRecordStorage {
    async fn load(&self) -> Result<Option<PersistedAssessment>, RecordStorageError> {
        if let Some(error) = self.take_injected_error().await {
            return Err(error);
        }
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &PersistedAssessment) -> Result<(), RecordStorageError> {
        if let Some(error) = self.take_injected_error().await {
            return Err(error);
        }
        *self.document.write().await = Some(document.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), RecordStorageError> {
        if let Some(error) = self.take_injected_error().await {
            return Err(error);
        }
        *self.document.write().await = None;
        Ok(())
    }
}
