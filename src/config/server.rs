//! Server configuration
//!
//! Read by the binary only: bind address, log filter, JSON logging in
//! production, request timeout, and allowed CORS origins.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Shortest accepted request timeout.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Longest accepted request timeout.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address to listen on
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Selects JSON log output when `production`
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive; `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated allowed origins; any origin when unset
    pub cors_origins: Option<String>,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Parses `host` and `port` into the listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Request timeout applied by the HTTP middleware.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Allowed CORS origins; empty means any origin.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .iter()
            .flat_map(|s| s.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.socket_addr()?;
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
            .contains(&self.request_timeout_secs)
        {
            return Err(ValidationError::InvalidTimeout {
                min: MIN_REQUEST_TIMEOUT_SECS,
                max: MAX_REQUEST_TIMEOUT_SECS,
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info,project_prioritizer=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
