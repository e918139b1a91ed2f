//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Server host must be an IP address (got '{0}')")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Request timeout must be between {min} and {max} seconds")]
    InvalidTimeout { min: u64, max: u64 },

    #[error("Upload size limit must be between 1 byte and {max} bytes")]
    InvalidUploadLimit { max: usize },

    #[error("Upload directory must not be empty")]
    EmptyUploadDir,
}
