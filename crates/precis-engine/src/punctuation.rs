//! Punctuation classification

use rustc_hash::FxHashSet;

/// ASCII punctuation characters
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Typographic marks that commonly appear in scraped and extracted text
pub const TYPOGRAPHIC_PUNCTUATION: &str = "\u{2018}\u{2019}\u{201C}\u{201D}\u{2013}\u{2014}\u{2026}\u{00AB}\u{00BB}\u{00A1}\u{00BF}\u{2022}\u{00B7}";

/// A fixed set of punctuation characters
#[derive(Debug, Clone)]
pub struct PunctuationSet {
    chars: FxHashSet<char>,
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::from_chars(ASCII_PUNCTUATION.chars().chain(TYPOGRAPHIC_PUNCTUATION.chars()))
    }
}

impl PunctuationSet {
    /// Only the ASCII punctuation characters
    pub fn ascii() -> Self {
        Self::from_chars(ASCII_PUNCTUATION.chars())
    }

    /// Build a set from arbitrary characters
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Whether a single character belongs to the set
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// True iff `raw` is non-empty and made up entirely of set members
    pub fn is_punctuation(&self, raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| self.contains(c))
    }

    /// Number of characters in the set
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
