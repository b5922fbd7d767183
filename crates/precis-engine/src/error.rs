//! Error types for the summarization engine

use thiserror::Error;

/// Errors returned by a single summarization call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// The text contained no detectable sentences
    #[error("Nothing to summarize: input contains no sentences")]
    EmptyInput,

    /// Selection ratio outside (0, 1]
    #[error("Invalid ratio: {0} (must be greater than 0 and at most 1)")]
    InvalidRatio(f64),

    /// Linguistic resources could not be loaded
    #[error(transparent)]
    ResourceLoad(#[from] ResourceError),
}

/// Errors raised while loading linguistic resources.
///
/// These are fatal at startup; a process that hits one cannot serve requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No stopword vocabulary exists for the requested language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A vocabulary was loaded but contained no entries
    #[error("Resource load failed: {0}")]
    EmptyVocabulary(String),
}
