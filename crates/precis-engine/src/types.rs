//! Request and result types for summarization

use crate::selector::SummaryOrder;
use serde::{Deserialize, Serialize};

/// Per-call options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    /// Fraction of sentences to keep, in (0, 1]
    pub ratio: f64,

    /// Output order of the selected sentences
    #[serde(default)]
    pub order: SummaryOrder,
}

impl SummarizeOptions {
    /// Options with the given ratio and score-descending output
    pub fn with_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            order: SummaryOrder::default(),
        }
    }

    /// Set the output order
    pub fn order(mut self, order: SummaryOrder) -> Self {
        self.order = order;
        self
    }
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self::with_ratio(crate::config::DEFAULT_RATIO)
    }
}

/// A sentence that made it into the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Position in the source document
    pub index: usize,
    /// Sentence text
    pub text: String,
    /// Sum of its content-word weights
    pub score: f64,
}

/// Result of a summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined with single spaces; may be empty
    pub text: String,

    /// Selected sentences in output order
    pub selected: Vec<SelectedSentence>,

    /// Number of sentences detected in the input
    pub total_sentences: usize,

    /// Input length in characters
    pub input_chars: usize,

    /// Summary length in characters
    pub summary_chars: usize,
}

impl Summary {
    /// Percentage reduction from input to summary length
    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(self.input_chars, self.summary_chars)
    }

    /// True when no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// `round((1 - summary/input) × 100, 2)`; 0 when `input_chars` is 0
pub fn compression_ratio(input_chars: usize, summary_chars: usize) -> f64 {
    if input_chars == 0 {
        return 0.0;
    }
    let ratio = (1.0 - summary_chars as f64 / input_chars as f64) * 100.0;
    (ratio * 100.0).round() / 100.0
}
