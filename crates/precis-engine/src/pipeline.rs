//! Linguistic pipeline
//!
//! Segments raw text into sentences and word tokens, then classifies each
//! token as stopword, punctuation or content word.
//!
//! ```text
//! text → Segmenter::sentences → trim → Segmenter::words → Token::classify
//! ```
//!
//! Boundary detection is pluggable through [`Segmenter`]. The default,
//! [`UnicodeSegmenter`], follows the UAX #29 sentence and word boundary rules,
//! which depend only on the input and the Unicode version compiled into
//! `unicode-segmentation`, so repeated runs produce identical boundaries.
//! On top of those rules it keeps "Dr. Smith" in one sentence and splits
//! "don't" into "do" + "n't".

use crate::resources::LinguisticResources;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Provider of sentence and word boundaries
pub trait Segmenter: Send + Sync {
    /// Byte ranges of sentences in `text`, in document order
    fn sentences(&self, text: &str) -> Vec<Range<usize>>;

    /// Byte ranges of word-level segments in `sentence`, in order.
    /// Whitespace segments may be included; the pipeline drops them.
    fn words(&self, sentence: &str) -> Vec<Range<usize>>;
}

/// UAX #29 segmentation with two English refinements: a sentence break after
/// a title or abbreviation such as "Dr." is undone, and trailing clitics
/// ("n't", "'s", "'ll", ...) become separate word segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn sentences(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut open: Option<usize> = None;

        for (start, segment) in text.split_sentence_bound_indices() {
            let begin = open.take().unwrap_or(start);
            if ends_with_abbreviation(segment) {
                open = Some(begin);
            } else {
                ranges.push(begin..start + segment.len());
            }
        }
        if let Some(begin) = open {
            ranges.push(begin..text.len());
        }
        ranges
    }

    fn words(&self, sentence: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        for (start, word) in sentence.split_word_bound_indices() {
            let end = start + word.len();
            match clitic_start(word) {
                Some(at) => {
                    ranges.push(start..start + at);
                    ranges.push(start + at..end);
                }
                None => ranges.push(start..end),
            }
        }
        ranges
    }
}

/// Abbreviations (without the final period) that do not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "gen", "col", "capt", "lt", "sgt",
    "gov", "sen", "rep", "vs", "fig", "cf", "approx", "e.g", "i.e",
];

/// Whether a sentence segment stops on a known abbreviation within the same
/// paragraph
fn ends_with_abbreviation(segment: &str) -> bool {
    let body = segment.trim_end();
    if segment[body.len()..].contains('\n') {
        return false;
    }
    let Some(stem) = body.strip_suffix('.') else {
        return false;
    };
    let word = stem
        .rsplit(|c: char| c.is_whitespace() || matches!(c, '(' | '"' | '\u{201C}'))
        .next()
        .unwrap_or(stem);
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Byte offset where a trailing clitic starts, if `word` has one and a
/// non-empty stem before it ("don't" splits at 2, "it's" at 2)
fn clitic_start(word: &str) -> Option<usize> {
    for suffix in ["t", "s", "d", "m", "ll", "re", "ve"] {
        let Some(head) = strip_suffix_ignore_case(word, suffix) else {
            continue;
        };
        let Some(apostrophe) = head
            .chars()
            .next_back()
            .filter(|c| matches!(c, '\'' | '\u{2018}' | '\u{2019}'))
        else {
            continue;
        };
        let mut at = head.len() - apostrophe.len_utf8();
        if suffix == "t" {
            // only "n't" is a clitic
            if !head[..at].ends_with(['n', 'N']) {
                continue;
            }
            at -= 1;
        }
        if at > 0 {
            return Some(at);
        }
    }
    None
}

fn strip_suffix_ignore_case<'w>(word: &'w str, suffix: &str) -> Option<&'w str> {
    let split = word.len().checked_sub(suffix.len())?;
    if word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case(suffix) {
        Some(&word[..split])
    } else {
        None
    }
}

/// A classified word-level token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    text: String,
    normalized: String,
    span: Range<usize>,
    is_stopword: bool,
    is_punctuation: bool,
}

impl Token {
    /// Classify a raw token found at byte offset `start`
    pub fn classify(raw: &str, start: usize, resources: &LinguisticResources) -> Self {
        let normalized = raw.to_lowercase();
        Self {
            is_stopword: resources.stopwords().contains_normalized(&normalized),
            is_punctuation: resources.punctuation().is_punctuation(raw),
            text: raw.to_string(),
            normalized,
            span: start..start + raw.len(),
        }
    }

    /// Surface form as it appears in the text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased form
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Byte range in the source document
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Member of the stopword vocabulary
    pub fn is_stopword(&self) -> bool {
        self.is_stopword
    }

    /// Made up entirely of punctuation characters
    pub fn is_punctuation(&self) -> bool {
        self.is_punctuation
    }

    /// Neither stopword nor punctuation
    pub fn is_content(&self) -> bool {
        !(self.is_stopword || self.is_punctuation)
    }
}

/// A sentence with its tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    index: usize,
    span: Range<usize>,
    text: String,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Position of the sentence within the document (0-based)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte range of the trimmed sentence text in the source document
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Sentence text with surrounding whitespace removed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Content tokens only
    pub fn content_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_content())
    }
}

/// Output of the pipeline for one input text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True when no sentence was detected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// All tokens across all sentences, in order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

/// Sentence and token analysis over shared resources
pub struct Pipeline<'a> {
    resources: &'a LinguisticResources,
    segmenter: &'a dyn Segmenter,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over borrowed resources and segmenter
    pub fn new(resources: &'a LinguisticResources, segmenter: &'a dyn Segmenter) -> Self {
        Self {
            resources,
            segmenter,
        }
    }

    /// Segment and classify `text`.
    ///
    /// Whitespace-only segments are skipped and do not count as sentences, so
    /// blank input yields an empty document.
    pub fn analyze(&self, text: &str) -> Document {
        let mut sentences = Vec::new();

        for range in self.segmenter.sentences(text) {
            let Some(raw) = text.get(range.clone()) else {
                continue;
            };
            let leading = raw.len() - raw.trim_start().len();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = range.start + leading;

            let tokens: Vec<Token> = self
                .segmenter
                .words(trimmed)
                .into_iter()
                .filter_map(|w| {
                    let word = trimmed.get(w.clone())?;
                    if word.trim().is_empty() {
                        None
                    } else {
                        Some(Token::classify(word, start + w.start, self.resources))
                    }
                })
                .collect();

            sentences.push(Sentence {
                index: sentences.len(),
                span: start..start + trimmed.len(),
                text: trimmed.to_string(),
                tokens,
            });
        }

        Document { sentences }
    }
}
