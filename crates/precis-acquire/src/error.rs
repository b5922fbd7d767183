//! Error types for text acquisition

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching a web page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL is malformed or lacks an http(s) scheme or host
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The page contained no visible text
    #[error("No text found at {0}")]
    NoText(String),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Network(e.to_string()),
        }
    }
}

/// Errors that can occur while extracting text from a PDF
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file does not exist
    #[error("The file {0} does not exist")]
    NotFound(PathBuf),

    /// Wrong extension or missing PDF signature
    #[error("Not a PDF: {0}")]
    NotPdf(String),

    /// Corrupt, encrypted or otherwise unreadable document
    #[error("Error reading PDF: {0}")]
    Unreadable(String),

    /// The document has no text layer
    #[error("The PDF contains no extractable text")]
    NoText,

    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
