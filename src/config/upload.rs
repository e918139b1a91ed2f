//! Upload configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Hard ceiling on the configurable upload limit (50 MiB).
pub const MAX_UPLOAD_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Upload handling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted file, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: usize,

    /// Directory for in-flight uploads; OS temp dir when unset
    pub upload_dir: Option<PathBuf>,
}

impl UploadConfig {
    /// Directory the upload storage writes to
    pub fn upload_path(&self) -> PathBuf {
        self.upload_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("project-prioritizer-uploads"))
    }

    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_file_size_bytes == 0 || self.max_file_size_bytes > MAX_UPLOAD_LIMIT_BYTES {
            return Err(ValidationError::InvalidUploadLimit {
                max: MAX_UPLOAD_LIMIT_BYTES,
            });
        }
        if matches!(&self.upload_dir, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(ValidationError::EmptyUploadDir);
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            upload_dir: None,
        }
    }
}

fn default_max_file_size() -> usize {
    2 * 1024 * 1024
}
