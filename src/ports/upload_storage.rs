//! Upload Storage Port - transient file storage for one request.
//!
//! An upload lives only for the duration of the request that carried it.
//! Callers must `release` every stored upload on every exit path.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Handle to an upload held by an `UploadStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub id: Uuid,
    pub original_name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl fmt::Display for StoredUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.original_name)
    }
}

/// Port for transient upload storage.
///
/// # Usage
///
/// ```rust,ignore
/// let upload = storage.store("projects.csv", &bytes).await?;
/// let contents = storage.read(&upload).await;
/// storage.release(&upload).await?;
/// ```
#[async_trait]
pub trait UploadStorage: Send + Sync {
    /// Persists the upload and returns a handle to it.
    async fn store(&self, original_name: &str, contents: &[u8])
        -> Result<StoredUpload, StorageError>;

    /// Reads the stored contents back.
    async fn read(&self, upload: &StoredUpload) -> Result<Vec<u8>, StorageError>;

    /// Deletes the stored upload. Releasing an already removed upload is
    /// not an error.
    async fn release(&self, upload: &StoredUpload) -> Result<(), StorageError>;
}

/// Errors that can occur during upload storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Stored upload was not found.
    #[error("Upload not found: {path}")]
    NotFound { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
}
