//! Stopword filtering
//!
//! Closed per-language vocabularies. English is embedded here; the other
//! languages come from the `stop-words` crate. Custom lists and
//! configuration-supplied additions are supported.

use crate::error::ResourceError;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A case-insensitive stopword set
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Stopwords, stored lowercase
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword vocabulary for a language code or name
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn for_language(language: &str) -> Result<Self, ResourceError> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => {
                return Ok(Self {
                    stopwords: english_stopwords(),
                })
            }
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => return Err(ResourceError::UnsupportedLanguage(other.to_string())),
        };

        let stopwords: FxHashSet<String> = get(lang).iter().map(|s| s.to_lowercase()).collect();
        if stopwords.is_empty() {
            return Err(ResourceError::EmptyVocabulary(format!(
                "no stopwords for language '{}'",
                language
            )));
        }

        Ok(Self { stopwords })
    }

    /// Create an empty filter (nothing is a stopword)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check membership. `word` may be in any case.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Check membership of an already-lowercased word without allocating
    pub fn contains_normalized(&self, normalized: &str) -> bool {
        self.stopwords.contains(normalized)
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Contraction pieces split off by the word segmenter
const CONTRACTIONS: [&str; 7] = ["n't", "'d", "'ll", "'m", "'re", "'s", "'ve"];

/// English function words plus contraction pieces in straight and curly
/// apostrophe forms
fn english_stopwords() -> FxHashSet<String> {
    let words = [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything",
        "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became", "because",
        "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
        "below", "beside", "besides", "between", "beyond", "both", "bottom", "but", "by",
        "call", "can", "cannot", "ca", "could", "did", "do", "does", "doing", "done", "down",
        "due", "during", "each", "eight", "either", "eleven", "else", "elsewhere", "empty",
        "enough", "even", "ever", "every", "everyone", "everything", "everywhere", "except",
        "few", "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty",
        "four", "from", "front", "full", "further", "get", "give", "go", "had", "has", "have",
        "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers",
        "herself", "him", "himself", "his", "how", "however", "hundred", "i", "if", "in",
        "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter",
        "latterly", "least", "less", "made", "make", "many", "may", "me", "meanwhile", "might",
        "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "my", "myself",
        "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no", "nobody",
        "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
        "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
        "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put", "quite",
        "rather", "re", "really", "regarding", "same", "say", "see", "seem", "seemed",
        "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
        "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
        "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that", "the",
        "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
        "therefore", "therein", "thereupon", "these", "they", "third", "this", "those",
        "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
        "top", "toward", "towards", "twelve", "twenty", "two", "under", "unless", "until", "up",
        "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well", "were",
        "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
        "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
        "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
        "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    ];

    let mut set: FxHashSet<String> = words.iter().map(|s| s.to_string()).collect();
    for contraction in CONTRACTIONS {
        for apostrophe in ["'", "\u{2018}", "\u{2019}"] {
            set.insert(contraction.replace('\'', apostrophe));
        }
    }
    set
}
