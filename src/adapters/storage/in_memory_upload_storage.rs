//! In-Memory Upload Storage Adapter
//!
//! Keeps uploads in memory and records how many were released.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::ports::{StorageError, StoredUpload, UploadStorage};

/// In-memory storage for in-flight uploads
#[derive(Debug, Clone, Default)]
pub struct InMemoryUploadStorage {
    uploads: Arc<RwLock<HashMap<Uuid, Vec<u8>>>>,
    released: Arc<RwLock<usize>>,
}

impl InMemoryUploadStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of uploads currently held
    pub async fn held_count(&self) -> usize {
        self.uploads.read().await.len()
    }

    /// Number of uploads released so far
    pub async fn released_count(&self) -> usize {
        *self.released.read().await
    }
}

#[async_trait]
impl UploadStorage for InMemoryUploadStorage {
    async fn store(
        &self,
        original_name: &str,
        contents: &[u8],
    ) -> Result<StoredUpload, StorageError> {
        let id = Uuid::new_v4();
        self.uploads.write().await.insert(id, contents.to_vec());

        Ok(StoredUpload {
            id,
            original_name: original_name.to_string(),
            path: PathBuf::from(format!("memory://{}", id)),
            size_bytes: contents.len() as u64,
        })
    }

    async fn read(&self, upload: &StoredUpload) -> Result<Vec<u8>, StorageError> {
        self.uploads
            .read()
            .await
            .get(&upload.id)
            .cloned()
            .ok_or_else(|| StorageError::not_found(upload.path.display().to_string()))
    }

    async fn release(&self, upload: &StoredUpload) -> Result<(), StorageError> {
        if self.uploads.write().await.remove(&upload.id).is_some() {
            *self.released.write().await += 1;
        }
        Ok(())
    }
}
