//! Configuration module for Sentinel
//!
//! Provides configuration loading from TOML files, environment variable
//! overrides, and range validation ahead of any network call.

pub mod endpoint;
pub mod error;
pub mod logging;

pub use endpoint::EndpointEntry;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Bounds enforced by `validate`.
pub const CONCURRENCY_RANGE: (u32, u32) = (1, 100);
pub const TIMEOUT_SECONDS_RANGE: (u64, u64) = (1, 600);

/// Main configuration struct for a verification pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Global endpoint used by discovery mode and as CLI default.
    pub base_url: String,
    pub api_key: String,
    /// Model driven when the CLI is pointed at a single model.
    pub default_model: String,
    /// Worker pool size for discovery mode, 1-100.
    pub concurrency: u32,
    /// Global HTTP timeout, 1s-10m.
    pub timeout_seconds: u64,
    pub endpoints: Vec<EndpointEntry>,
    pub logging: LoggingConfig,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            default_model: String::new(),
            concurrency: 1,
            timeout_seconds: 30,
            endpoints: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl VerifierConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports SENTINEL_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("SENTINEL_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(key) = std::env::var("SENTINEL_API_KEY") {
            self.api_key = key;
        }
        if let Ok(model) = std::env::var("SENTINEL_MODEL") {
            self.default_model = model;
        }
        if let Ok(concurrency) = std::env::var("SENTINEL_CONCURRENCY") {
            if let Ok(c) = concurrency.parse() {
                self.concurrency = c;
            }
        }
        if let Ok(timeout) = std::env::var("SENTINEL_TIMEOUT_SECONDS") {
            if let Ok(t) = timeout.parse() {
                self.timeout_seconds = t;
            }
        }
        if let Ok(level) = std::env::var("SENTINEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SENTINEL_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        self
    }

    /// Validate configuration ranges before any probe runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (c_min, c_max) = CONCURRENCY_RANGE;
        if self.concurrency < c_min || self.concurrency > c_max {
            return Err(ConfigError::Validation {
                field: "concurrency".to_string(),
                message: format!("must be between {c_min} and {c_max}"),
            });
        }

        let (t_min, t_max) = TIMEOUT_SECONDS_RANGE;
        if self.timeout_seconds < t_min || self.timeout_seconds > t_max {
            return Err(ConfigError::Validation {
                field: "timeout_seconds".to_string(),
                message: format!("must be between {t_min}s and {t_max}s"),
            });
        }

        for (i, entry) in self.endpoints.iter().enumerate() {
            if entry.url.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("endpoints[{}].url", i),
                    message: "URL cannot be empty".to_string(),
                });
            }
            if entry.name.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("endpoints[{}].name", i),
                    message: "name cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
