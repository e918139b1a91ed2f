//! File-based Upload Storage Adapter
//!
//! Writes each upload to its own uuid-named file under a base directory and
//! removes it again on release.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::ports::{StorageError, StoredUpload, UploadStorage};

/// File-based storage for in-flight uploads
#[derive(Debug, Clone)]
pub struct FileUploadStorage {
    base_path: PathBuf,
}

impl FileUploadStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileUploadStorage::new(std::env::temp_dir().join("uploads"));
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the base directory
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for an upload id
    fn upload_path(&self, id: Uuid) -> PathBuf {
        self.base_path.join(format!("upload_{}.tmp", id))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create upload directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl UploadStorage for FileUploadStorage {
    async fn store(
        &self,
        original_name: &str,
        contents: &[u8],
    ) -> Result<StoredUpload, StorageError> {
        self.ensure_dir().await?;

        let id = Uuid::new_v4();
        let path = self.upload_path(id);

        fs::write(&path, contents)
            .await
            .map_err(|e| StorageError::io(e.to_string()))?;

        tracing::debug!(upload_id = %id, path = %path.display(), "Stored upload");

        Ok(StoredUpload {
            id,
            original_name: original_name.to_string(),
            path,
            size_bytes: contents.len() as u64,
        })
    }

    async fn read(&self, upload: &StoredUpload) -> Result<Vec<u8>, StorageError> {
        fs::read(&upload.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::not_found(upload.path.display().to_string()),
            _ => StorageError::io(e.to_string()),
        })
    }

    async fn release(&self, upload: &StoredUpload) -> Result<(), StorageError> {
        match fs::remove_file(&upload.path).await {
            Ok(()) => {
                tracing::debug!(upload_id = %upload.id, "Released upload");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(e.to_string())),
        }
    }
}
