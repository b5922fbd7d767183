//! The summarization entry point
//!
//! Runs the three stages in sequence for one input text:
//!
//! ```text
//! text → Pipeline → FrequencyTable → SentenceSelector → Summary
//! ```
//!
//! A [`Summarizer`] only holds shared read-only state, so it can be wrapped in
//! an `Arc` and called from many threads at once. Everything built during a
//! call is local to that call.

use crate::config::{is_valid_ratio, EngineConfig};
use crate::error::{ResourceError, SummarizeError};
use crate::frequency::FrequencyTable;
use crate::pipeline::{Document, Pipeline, Segmenter, UnicodeSegmenter};
use crate::resources::LinguisticResources;
use crate::selector::{select_count, SentenceSelector, SummaryOrder};
use crate::types::{SelectedSentence, SummarizeOptions, Summary};
use std::sync::Arc;

/// Frequency-based extractive summarizer
#[derive(Clone)]
pub struct Summarizer {
    resources: Arc<LinguisticResources>,
    segmenter: Arc<dyn Segmenter>,
    defaults: SummarizeOptions,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("language", &self.resources.language())
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl Summarizer {
    /// Create a summarizer over shared resources with the UAX #29 segmenter
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self {
            resources,
            segmenter: Arc::new(UnicodeSegmenter),
            defaults: SummarizeOptions::default(),
        }
    }

    /// Summarizer over the shared English resources
    pub fn english() -> Result<Self, ResourceError> {
        Ok(Self::new(LinguisticResources::english()?))
    }

    /// Build resources and defaults from configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self, ResourceError> {
        let resources = if config.extra_stopwords.is_empty()
            && matches!(config.language.trim().to_lowercase().as_str(), "en" | "english")
        {
            LinguisticResources::english()?
        } else {
            Arc::new(
                LinguisticResources::for_language(&config.language)?
                    .with_extra_stopwords(&config.extra_stopwords),
            )
        };

        Ok(Self::new(resources).with_defaults(
            SummarizeOptions::with_ratio(config.default_ratio).order(config.order),
        ))
    }

    /// Replace the segmenter
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the default options used by [`Summarizer::summarize`]
    pub fn with_defaults(mut self, defaults: SummarizeOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default options
    pub fn defaults(&self) -> SummarizeOptions {
        self.defaults
    }

    /// Shared linguistic resources
    pub fn resources(&self) -> &LinguisticResources {
        &self.resources
    }

    /// Segment and classify text without scoring it
    pub fn analyze(&self, text: &str) -> Document {
        Pipeline::new(&self.resources, self.segmenter.as_ref()).analyze(text)
    }

    /// Summarize with the given ratio and the default output order
    pub fn summarize(&self, text: &str, ratio: f64) -> Result<Summary, SummarizeError> {
        self.summarize_with(
            text,
            SummarizeOptions::with_ratio(ratio).order(self.defaults.order),
        )
    }

    /// Summarize with explicit options.
    ///
    /// The ratio is checked before the text is analyzed. A document whose
    /// `floor(sentences × ratio)` is 0 yields an empty summary, not an error.
    pub fn summarize_with(
        &self,
        text: &str,
        options: SummarizeOptions,
    ) -> Result<Summary, SummarizeError> {
        if !is_valid_ratio(options.ratio) {
            return Err(SummarizeError::InvalidRatio(options.ratio));
        }

        let document = self.analyze(text);
        if document.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let table = FrequencyTable::build(document.tokens());
        let k = select_count(document.len(), options.ratio);
        let selected = SentenceSelector::new()
            .with_order(options.order)
            .select(document.sentences(), &table, k);

        let summary_text = SentenceSelector::join(&selected);
        Ok(Summary {
            input_chars: text.chars().count(),
            summary_chars: summary_text.chars().count(),
            total_sentences: document.len(),
            selected: selected
                .iter()
                .map(|s| SelectedSentence {
                    index: s.index(),
                    text: s.sentence.text().to_string(),
                    score: s.score,
                })
                .collect(),
            text: summary_text,
        })
    }

    /// Summarize using the default options
    pub fn summarize_default(&self, text: &str) -> Result<Summary, SummarizeError> {
        self.summarize_with(text, self.defaults)
    }

    /// Summarize in reading order
    pub fn summarize_in_reading_order(
        &self,
        text: &str,
        ratio: f64,
    ) -> Result<Summary, SummarizeError> {
        self.summarize_with(
            text,
            SummarizeOptions::with_ratio(ratio).order(SummaryOrder::Reading),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::punctuation::PunctuationSet;
    use std::ops::Range;

    const CATS: &str = "The cat sat. The cat sat on the mat. Cats are great pets.";

    fn summarizer() -> Summarizer {
        Summarizer::new(Arc::new(LinguisticResources::from_lists(
            &["the", "on", "are"],
            PunctuationSet::default(),
        )))
    }

    #[test]
    fn test_small_ratio_gives_empty_summary() {
        let summary = summarizer().summarize(CATS, 0.3).unwrap();
        assert_eq!(summary.text, "");
        assert!(summary.is_empty());
        assert_eq!(summary.total_sentences, 3);
        assert_eq!(summary.summary_chars, 0);
        assert_eq!(summary.compression_ratio(), 100.0);
    }

    #[test]
    fn test_picks_highest_scoring_sentence() {
        let summary = summarizer().summarize(CATS, 0.6).unwrap();
        assert_eq!(summary.text, "The cat sat on the mat.");
        assert_eq!(summary.selected.len(), 1);
        assert_eq!(summary.selected[0].index, 1);
        assert_eq!(summary.selected[0].score, 2.5);
    }

    #[test]
    fn test_invalid_ratio() {
        let s = summarizer();
        assert_eq!(s.summarize(CATS, 0.0), Err(SummarizeError::InvalidRatio(0.0)));
        assert_eq!(s.summarize(CATS, 1.5), Err(SummarizeError::InvalidRatio(1.5)));
        assert!(matches!(
            s.summarize(CATS, f64::NAN),
            Err(SummarizeError::InvalidRatio(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let s = summarizer();
        assert_eq!(s.summarize("", 0.5), Err(SummarizeError::EmptyInput));
        assert_eq!(s.summarize(" \n\t ", 0.5), Err(SummarizeError::EmptyInput));
    }

    #[test]
    fn test_single_sentence() {
        let s = summarizer();
        assert_eq!(s.summarize("Only one sentence here.", 0.999).unwrap().text, "");
        assert_eq!(
            s.summarize("Only one sentence here.", 1.0).unwrap().text,
            "Only one sentence here."
        );
    }

    #[test]
    fn test_reading_order_mode() {
        let summary = summarizer().summarize_in_reading_order(CATS, 0.7).unwrap();
        assert_eq!(summary.text, "The cat sat. The cat sat on the mat.");
    }

    #[test]
    fn test_defaults_from_config() {
        let config = EngineConfig {
            language: "en".to_string(),
            default_ratio: 1.0,
            order: SummaryOrder::Reading,
            extra_stopwords: vec!["cat".to_string()],
        };
        let s = Summarizer::from_config(&config).unwrap();
        assert_eq!(s.defaults().ratio, 1.0);
        assert!(s.resources().stopwords().is_stopword("cat"));

        let summary = s.summarize_default("First line. Second line.").unwrap();
        assert_eq!(summary.text, "First line. Second line.");
    }

    #[test]
    fn test_unknown_language_fails_to_load() {
        let config = EngineConfig {
            language: "zz".to_string(),
            ..EngineConfig::default()
        };
        assert!(Summarizer::from_config(&config).is_err());
    }

    /// Splits sentences on newlines and words on spaces
    struct LineSegmenter;

    impl Segmenter for LineSegmenter {
        fn sentences(&self, text: &str) -> Vec<Range<usize>> {
            let mut ranges = Vec::new();
            let mut start = 0;
            for line in text.split_inclusive('\n') {
                ranges.push(start..start + line.len());
                start += line.len();
            }
            ranges
        }

        fn words(&self, sentence: &str) -> Vec<Range<usize>> {
            let mut ranges = Vec::new();
            let mut start = 0;
            for word in sentence.split_inclusive(' ') {
                ranges.push(start..start + word.trim_end().len());
                start += word.len();
            }
            ranges
        }
    }

    #[test]
    fn test_custom_segmenter() {
        let s = summarizer().with_segmenter(Arc::new(LineSegmenter));
        let summary = s.summarize("alpha beta\nalpha\ngamma", 0.4).unwrap();
        assert_eq!(summary.total_sentences, 3);
        assert_eq!(summary.text, "alpha beta");
    }
}
