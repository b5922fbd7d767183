//! Normalized word-frequency model

use crate::pipeline::Token;
use rustc_hash::FxHashMap;

/// Content word → weight in [0, 1]
///
/// Weights are raw counts divided by the largest count, so the most frequent
/// word(s) weigh exactly 1.0. A document without content words produces an
/// empty table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: FxHashMap<String, f64>,
}

impl FrequencyTable {
    /// Build the table from a token stream.
    ///
    /// Only content tokens are counted, keyed by their lowercased form.
    pub fn build<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokens.into_iter().filter(|t| t.is_content()) {
            *counts.entry(token.normalized().to_string()).or_insert(0) += 1;
        }

        let max_count = counts.values().copied().max().unwrap_or(1) as f64;
        let weights = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max_count))
            .collect();

        Self { weights }
    }

    /// Weight of a lowercased word; 0.0 when absent
    pub fn weight(&self, normalized: &str) -> f64 {
        self.weights.get(normalized).copied().unwrap_or(0.0)
    }

    /// Whether the word has an entry
    pub fn contains(&self, normalized: &str) -> bool {
        self.weights.contains_key(normalized)
    }

    /// Largest weight, or `None` for an empty table
    pub fn max_weight(&self) -> Option<f64> {
        self.weights.values().copied().reduce(f64::max)
    }

    /// Number of distinct content words
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when the document had no content words
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries sorted by descending weight, then alphabetically
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .weights
            .iter()
            .map(|(w, &v)| (w.as_str(), v))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
