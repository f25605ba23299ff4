//! Configuration for the GoetGevonden client.
//!
//! Every field has a default pointing at the public production service, so
//! `ClientConfig::default()` is a working configuration. `validate()` runs
//! before any client is built.

use serde::Deserialize;
use std::path::Path;

/// Default public endpoint of the GoetGevonden API.
pub const DEFAULT_BASE_URL: &str = "https://api.goetgevonden.nl";

/// Project hosting De resoluties van de Staten-Generaal.
pub const DEFAULT_PROJECT: &str = "republic";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ClientConfig {
    /// Base URL of the API; a trailing slash is tolerated.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Project used by the convenience search methods.
    pub default_project: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_project: DEFAULT_PROJECT.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}

impl ClientConfig {
    /// Load a configuration from a TOML file.
    ///
    /// Unlisted fields keep their defaults; unknown fields are rejected.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be > 0".to_string(),
            });
        }
        if self.default_project.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_project",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
