//! Frequency-based sentence scoring and top-k selection
//!
//! Each sentence scores the sum of the frequency weights of its content
//! tokens. The `k = floor(n × ratio)` best sentences are kept, with equal
//! scores resolved in favor of the earlier sentence.

use crate::frequency::FrequencyTable;
use crate::pipeline::Sentence;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Order in which selected sentences are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrder {
    /// Highest score first (ties: earlier sentence first)
    #[default]
    ScoreDescending,
    /// Original document order
    Reading,
}

/// A sentence paired with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    /// The sentence
    pub sentence: &'a Sentence,
    /// Sum of content-word weights
    pub score: f64,
}

impl ScoredSentence<'_> {
    /// Document position of the sentence
    pub fn index(&self) -> usize {
        self.sentence.index()
    }

    /// Higher score first; lower position first on ties
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index().cmp(&other.index()))
    }
}

/// Number of sentences to keep: `floor(total × ratio)`, capped at `total`
pub fn select_count(total: usize, ratio: f64) -> usize {
    ((total as f64 * ratio).floor() as usize).min(total)
}

/// Score a single sentence against a frequency table
pub fn score_sentence(sentence: &Sentence, table: &FrequencyTable) -> f64 {
    sentence
        .content_tokens()
        .map(|t| table.weight(t.normalized()))
        .fold(0.0, |acc, w| acc + w)
}

/// Top-k sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector {
    order: SummaryOrder,
}

impl SentenceSelector {
    /// Selector with the default (score-descending) output order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output order
    pub fn with_order(mut self, order: SummaryOrder) -> Self {
        self.order = order;
        self
    }

    /// The configured output order
    pub fn order(&self) -> SummaryOrder {
        self.order
    }

    /// Score every sentence, in document order
    pub fn score<'a>(
        &self,
        sentences: &'a [Sentence],
        table: &FrequencyTable,
    ) -> Vec<ScoredSentence<'a>> {
        sentences
            .iter()
            .map(|sentence| ScoredSentence {
                sentence,
                score: score_sentence(sentence, table),
            })
            .collect()
    }

    /// Keep the `k` best sentences, emitted in the configured order
    pub fn select<'a>(
        &self,
        sentences: &'a [Sentence],
        table: &FrequencyTable,
        k: usize,
    ) -> Vec<ScoredSentence<'a>> {
        if k == 0 {
            return Vec::new();
        }

        let mut ranked = self.score(sentences, table);
        ranked.sort_by(|a, b| a.rank_cmp(b));
        ranked.truncate(k);

        if self.order == SummaryOrder::Reading {
            ranked.sort_by_key(|s| s.index());
        }
        ranked
    }

    /// Join selected sentences with single spaces
    pub fn join(selected: &[ScoredSentence<'_>]) -> String {
        selected
            .iter()
            .map(|s| s.sentence.text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Document, Pipeline, UnicodeSegmenter};
    use crate::punctuation::PunctuationSet;
    use crate::resources::LinguisticResources;

    const CATS: &str = "The cat sat. The cat sat on the mat. Cats are great pets.";

    fn analyze(text: &str) -> (Document, FrequencyTable) {
        let resources =
            LinguisticResources::from_lists(&["the", "on", "are"], PunctuationSet::default());
        let doc = Pipeline::new(&resources, &UnicodeSegmenter).analyze(text);
        let table = FrequencyTable::build(doc.tokens());
        (doc, table)
    }

    #[test]
    fn test_select_count() {
        assert_eq!(select_count(3, 0.3), 0);
        assert_eq!(select_count(3, 0.6), 1);
        assert_eq!(select_count(10, 0.3), 3);
        assert_eq!(select_count(1, 0.999), 0);
        assert_eq!(select_count(1, 1.0), 1);
        assert_eq!(select_count(0, 1.0), 0);
    }

    #[test]
    fn test_sentence_scores() {
        let (doc, table) = analyze(CATS);
        let scores: Vec<f64> = SentenceSelector::new()
            .score(doc.sentences(), &table)
            .iter()
            .map(|s| s.score)
            .collect();
        assert_eq!(scores, vec![2.0, 2.5, 1.5]);
    }

    #[test]
    fn test_top_one() {
        let (doc, table) = analyze(CATS);
        let selected = SentenceSelector::new().select(doc.sentences(), &table, 1);
        assert_eq!(SentenceSelector::join(&selected), "The cat sat on the mat.");
    }

    #[test]
    fn test_score_descending_order() {
        let (doc, table) = analyze(CATS);
        let selected = SentenceSelector::new().select(doc.sentences(), &table, 3);
        let indices: Vec<usize> = selected.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![1, 0, 2]);
    }

    #[test]
    fn test_reading_order() {
        let (doc, table) = analyze(CATS);
        let selected = SentenceSelector::new()
            .with_order(SummaryOrder::Reading)
            .select(doc.sentences(), &table, 2);
        assert_eq!(
            SentenceSelector::join(&selected),
            "The cat sat. The cat sat on the mat."
        );
    }

    #[test]
    fn test_ties_prefer_earlier_sentence() {
        let (doc, table) = analyze("Alpha beta. Gamma delta. Alpha beta.");
        let selected = SentenceSelector::new().select(doc.sentences(), &table, 2);
        let indices: Vec<usize> = selected.iter().map(|s| s.index()).collect();
        // "Alpha beta." scores 2.0 twice, "Gamma delta." scores 1.0
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_sentences_without_content_score_zero() {
        let (doc, table) = analyze("The. Cats purr.");
        let scored = SentenceSelector::new().score(doc.sentences(), &table);
        assert_eq!(scored[0].score, 0.0);
        assert!(scored[0].score.is_sign_positive());
        assert_eq!(scored[1].score, 2.0);
    }

    #[test]
    fn test_zero_k_selects_nothing() {
        let (doc, table) = analyze(CATS);
        assert!(SentenceSelector::new()
            .select(doc.sentences(), &table, 0)
            .is_empty());
    }

    #[test]
    fn test_summary_order_serde() {
        let order: SummaryOrder = serde_json::from_str("\"reading\"").unwrap();
        assert_eq!(order, SummaryOrder::Reading);
        assert_eq!(
            serde_json::to_string(&SummaryOrder::ScoreDescending).unwrap(),
            "\"score_descending\""
        );
    }
}
