//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRIORITIZER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a runnable config.
//!
//! # Example
//!
//! ```no_run
//! use project_prioritizer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().expect("Invalid address"));
//! ```

mod error;
mod server;
mod upload;

pub use error::{ConfigError, ValidationError};
pub use server::{
    Environment, ServerConfig, DEFAULT_PORT, MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};
pub use upload::{UploadConfig, MAX_UPLOAD_LIMIT_BYTES};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload configuration (size limit, transient directory)
    #[serde(default)]
    pub upload: UploadConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PRIORITIZER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRIORITIZER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PRIORITIZER__UPLOAD__MAX_FILE_SIZE_BYTES=1048576` -> `upload.max_file_size_bytes`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRIORITIZER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.upload.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
