//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, input limits,
//! timeouts, and the engine section.

use precis_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 5000)
    pub bind_port: u16,

    /// Largest accepted input, in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Largest accepted request body, in bytes (16 MiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Wall-clock budget for one summarization
    #[serde(default = "default_summarize_timeout")]
    pub summarize_timeout_secs: u64,

    /// Timeout for fetching a web page
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_max_input_chars() -> usize {
    1_000_000
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_summarize_timeout() -> u64 {
    30
}

fn default_fetch_timeout() -> u64 {
    20
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_chars == 0 {
            return Err(ConfigError::Invalid(
                "max_input_chars must be greater than 0".to_string(),
            ));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }
        if self.summarize_timeout_secs == 0 || self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeouts must be greater than 0".to_string(),
            ));
        }
        self.engine.validate().map_err(ConfigError::Invalid)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 5000,
            max_input_chars: default_max_input_chars(),
            max_upload_bytes: default_max_upload_bytes(),
            summarize_timeout_secs: default_summarize_timeout(),
            fetch_timeout_secs: default_fetch_timeout(),
            engine: EngineConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Summarization budget as a Duration
    pub fn summarize_timeout(&self) -> Duration {
        Duration::from_secs(self.summarize_timeout_secs)
    }

    /// Fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
