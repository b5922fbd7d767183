//! Error types for the CLI application.

use precis_acquire::{ExtractError, FetchError};
use precis_engine::{ResourceError, SummarizeError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine rejected the input
    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    /// Linguistic resources could not be loaded
    #[error(transparent)]
    Resources(#[from] ResourceError),

    /// Web page could not be fetched
    #[error("Failed to scrape text from the URL: {0}")]
    Fetch(#[from] FetchError),

    /// PDF could not be read
    #[error("Failed to extract text from the PDF: {0}")]
    Extract(#[from] ExtractError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
