//! Process-wide linguistic resources
//!
//! Stopwords and punctuation are loaded once, then shared read-only between
//! every summarization call. Nothing in here is mutated after construction,
//! so a single instance can be handed to any number of threads.

use crate::error::ResourceError;
use crate::punctuation::PunctuationSet;
use crate::stopwords::StopwordFilter;
use std::sync::{Arc, OnceLock};

/// Stopword and punctuation vocabularies for one language
#[derive(Debug, Clone)]
pub struct LinguisticResources {
    language: String,
    stopwords: StopwordFilter,
    punctuation: PunctuationSet,
}

static ENGLISH: OnceLock<Result<Arc<LinguisticResources>, ResourceError>> = OnceLock::new();

impl LinguisticResources {
    /// Load resources for a language code (e.g. "en", "de")
    pub fn for_language(language: &str) -> Result<Self, ResourceError> {
        Ok(Self {
            language: language.trim().to_lowercase(),
            stopwords: StopwordFilter::for_language(language)?,
            punctuation: PunctuationSet::default(),
        })
    }

    /// Shared English resources, loaded on first use
    pub fn english() -> Result<Arc<LinguisticResources>, ResourceError> {
        ENGLISH
            .get_or_init(|| Self::for_language("en").map(Arc::new))
            .clone()
    }

    /// Build from explicit vocabularies
    pub fn from_lists(stopwords: &[&str], punctuation: PunctuationSet) -> Self {
        Self {
            language: "custom".to_string(),
            stopwords: StopwordFilter::from_list(stopwords),
            punctuation,
        }
    }

    /// Merge extra stopwords into the vocabulary
    pub fn with_extra_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stopwords.add_stopwords(words);
        self
    }

    /// Language these resources were loaded for
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The stopword vocabulary
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// The punctuation set
    pub fn punctuation(&self) -> &PunctuationSet {
        &self.punctuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_loaded_once() {
        let first = LinguisticResources::english().unwrap();
        let second = LinguisticResources::english().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.language(), "en");
        assert!(first.stopwords().is_stopword("the"));
    }

    #[test]
    fn test_unsupported_language() {
        assert!(matches!(
            LinguisticResources::for_language("xx"),
            Err(ResourceError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_extra_stopwords() {
        let resources = LinguisticResources::from_lists(&["the"], PunctuationSet::ascii())
            .with_extra_stopwords(&["Lorem"]);
        assert!(resources.stopwords().is_stopword("lorem"));
        assert!(resources.stopwords().is_stopword("the"));
        assert_eq!(resources.language(), "custom");
    }
}
