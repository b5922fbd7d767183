//! Precis Engine
//!
//! Frequency-based extractive summarization.
//!
//! # Overview
//!
//! The engine keeps the most informationally dense sentences of a text. Every
//! content word (a token that is neither a stopword nor punctuation) gets a
//! weight equal to its count divided by the count of the most frequent content
//! word. A sentence scores the sum of its content-word weights, and the
//! `floor(sentences × ratio)` best sentences form the summary.
//!
//! # Architecture
//!
//! ```text
//! text → Pipeline → FrequencyTable → SentenceSelector → Summary
//! ```
//!
//! - [`pipeline`]: sentence/word segmentation and token classification
//! - [`frequency`]: normalized word weights
//! - [`selector`]: sentence scoring and top-k selection
//! - [`summarizer`]: the entry point tying the stages together
//!
//! Linguistic resources ([`LinguisticResources`]) are loaded once and shared
//! read-only. The engine performs no I/O and does not log.
//!
//! # Example Usage
//!
//! ```no_run
//! use precis_engine::Summarizer;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let summarizer = Summarizer::english()?;
//! let summary = summarizer.summarize("Some long text. With sentences.", 0.5)?;
//!
//! println!("{}", summary.text);
//! println!("Compression: {}%", summary.compression_ratio());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod punctuation;
pub mod resources;
pub mod selector;
pub mod stopwords;
pub mod summarizer;
pub mod types;

pub use config::{EngineConfig, DEFAULT_RATIO};
pub use error::{ResourceError, SummarizeError};
pub use frequency::FrequencyTable;
pub use pipeline::{Document, Pipeline, Segmenter, Sentence, Token, UnicodeSegmenter};
pub use punctuation::PunctuationSet;
pub use resources::LinguisticResources;
pub use selector::{ScoredSentence, SentenceSelector, SummaryOrder};
pub use stopwords::StopwordFilter;
pub use summarizer::Summarizer;
pub use types::{compression_ratio, SelectedSentence, SummarizeOptions, Summary};

/// Summarize `text` keeping `ratio` of its sentences, using the shared English
/// resources and score-descending output.
pub fn summarize(text: &str, ratio: f64) -> Result<String, SummarizeError> {
    Ok(Summarizer::english()?.summarize(text, ratio)?.text)
}
