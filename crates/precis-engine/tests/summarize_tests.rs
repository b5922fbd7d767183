//! End-to-end tests for the summarization engine

use precis_engine::{
    compression_ratio, FrequencyTable, LinguisticResources, PunctuationSet, SummarizeError,
    SummarizeOptions, Summarizer, SummaryOrder,
};
use proptest::prelude::*;
use std::sync::Arc;

const CATS: &str = "The cat sat. The cat sat on the mat. Cats are great pets.";

const ARTICLE: &str = "Rust is a systems programming language. \
    Rust guarantees memory safety without a garbage collector. \
    The borrow checker enforces ownership rules at compile time. \
    Many companies adopt Rust for performance critical services. \
    Cargo is the package manager shipped with Rust. \
    Crates published on the registry can be reused by anyone. \
    The community values documentation and friendly error messages. \
    Async programming in Rust relies on futures and executors. \
    Memory safety bugs are a major source of security vulnerabilities. \
    Rust programs compile to efficient native code.";

fn cats_summarizer() -> Summarizer {
    Summarizer::new(Arc::new(LinguisticResources::from_lists(
        &["the", "on", "are"],
        PunctuationSet::default(),
    )))
}

#[test]
fn test_cats_scenario_small_ratio() {
    let summary = cats_summarizer().summarize(CATS, 0.3).unwrap();
    assert_eq!(summary.text, "");
    assert_eq!(summary.total_sentences, 3);
}

#[test]
fn test_cats_scenario_larger_ratio() {
    let summary = cats_summarizer().summarize(CATS, 0.6).unwrap();
    assert_eq!(summary.text, "The cat sat on the mat.");
}

#[test]
fn test_cats_frequency_table() {
    let summarizer = cats_summarizer();
    let doc = summarizer.analyze(CATS);
    let table = FrequencyTable::build(doc.tokens());

    assert_eq!(
        table.ranked(),
        vec![
            ("cat", 1.0),
            ("sat", 1.0),
            ("cats", 0.5),
            ("great", 0.5),
            ("mat", 0.5),
            ("pets", 0.5),
        ]
    );
}

#[test]
fn test_invalid_ratio_for_non_empty_text() {
    let summarizer = cats_summarizer();
    for ratio in [0.0, 1.5, -0.1] {
        assert_eq!(
            summarizer.summarize(CATS, ratio),
            Err(SummarizeError::InvalidRatio(ratio))
        );
    }
}

#[test]
fn test_whitespace_only_text() {
    assert_eq!(
        cats_summarizer().summarize("   \n\n  ", 0.3),
        Err(SummarizeError::EmptyInput)
    );
}

#[test]
fn test_english_article() {
    let summarizer = Summarizer::english().unwrap();
    let summary = summarizer.summarize(ARTICLE, 0.3).unwrap();

    assert_eq!(summary.total_sentences, 10);
    assert_eq!(summary.selected.len(), 3);
    assert!(summary.summary_chars < summary.input_chars);
    assert!(summary.compression_ratio() > 0.0);

    // Score-descending by default
    for pair in summary.selected.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_english_topical_words_drive_scores() {
    let summarizer = Summarizer::english().unwrap();
    let text = "Research shows new data. The world needs important work. Cats purr loudly.";
    let summary = summarizer.summarize(text, 1.0).unwrap();

    let scores: Vec<f64> = summary.selected.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![4.0, 4.0, 3.0]);
    assert_eq!(summary.text, text);
}

#[test]
fn test_curly_contractions_are_not_content() {
    let summarizer = Summarizer::english().unwrap();
    let doc = summarizer.analyze("I don\u{2019}t know. I don't know.");
    let content: Vec<&str> = doc
        .tokens()
        .filter(|t| t.is_content())
        .map(|t| t.normalized())
        .collect();
    assert_eq!(content, vec!["know", "know"]);
}

#[test]
fn test_titles_do_not_create_fragment_sentences() {
    let summary = precis_engine::summarize("Dr. Smith arrived. He left.", 1.0).unwrap();
    assert_eq!(summary, "Dr. Smith arrived. He left.");

    let summarizer = Summarizer::english().unwrap();
    let summary = summarizer
        .summarize("Mr. Jones met Mrs. Smith at 3 p.m. today. They talked.", 1.0)
        .unwrap();
    assert_eq!(summary.total_sentences, 2);
}

#[test]
fn test_reading_order_contains_same_sentences() {
    let summarizer = Summarizer::english().unwrap();
    let by_score = summarizer.summarize(ARTICLE, 0.5).unwrap();
    let by_position = summarizer
        .summarize_with(ARTICLE, SummarizeOptions::with_ratio(0.5).order(SummaryOrder::Reading))
        .unwrap();

    let mut score_indices: Vec<usize> = by_score.selected.iter().map(|s| s.index).collect();
    let position_indices: Vec<usize> = by_position.selected.iter().map(|s| s.index).collect();
    score_indices.sort_unstable();
    assert_eq!(score_indices, position_indices);
}

#[test]
fn test_top_level_summarize() {
    let text = precis_engine::summarize(ARTICLE, 0.2).unwrap();
    assert!(!text.is_empty());
    assert_eq!(precis_engine::summarize("", 0.2), Err(SummarizeError::EmptyInput));
}

#[test]
fn test_summarizer_is_shareable_across_threads() {
    let summarizer = Arc::new(Summarizer::english().unwrap());
    let expected = summarizer.summarize(ARTICLE, 0.4).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let summarizer = Arc::clone(&summarizer);
            std::thread::spawn(move || summarizer.summarize(ARTICLE, 0.4).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..8).prop_map(|words| {
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    })
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence_strategy(), 1..12).prop_map(|s| s.join(" "))
}

proptest! {
    /// Property: the heaviest word of a non-empty table weighs exactly 1.0
    #[test]
    fn prop_max_weight_is_one(text in document_strategy()) {
        let summarizer = Summarizer::new(Arc::new(
            LinguisticResources::from_lists(&[], PunctuationSet::default()),
        ));
        let doc = summarizer.analyze(&text);
        let table = FrequencyTable::build(doc.tokens());
        prop_assert_eq!(table.max_weight(), Some(1.0));
    }

    /// Property: segmentation is stable across repeated calls
    #[test]
    fn prop_sentence_count_is_deterministic(text in document_strategy()) {
        let summarizer = Summarizer::english().unwrap();
        prop_assert_eq!(summarizer.analyze(&text).len(), summarizer.analyze(&text).len());
    }

    /// Property: summarize is idempotent
    #[test]
    fn prop_idempotent(text in document_strategy(), ratio in 0.01f64..=1.0) {
        let summarizer = Summarizer::english().unwrap();
        let first = summarizer.summarize(&text, ratio).unwrap();
        let second = summarizer.summarize(&text, ratio).unwrap();
        prop_assert_eq!(first.text, second.text);
    }

    /// Property: a larger ratio never selects fewer sentences
    #[test]
    fn prop_monotonic_in_ratio(
        text in document_strategy(),
        a in 0.01f64..=1.0,
        b in 0.01f64..=1.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let summarizer = Summarizer::english().unwrap();
        let small = summarizer.summarize(&text, low).unwrap();
        let large = summarizer.summarize(&text, high).unwrap();
        prop_assert!(small.selected.len() <= large.selected.len());
    }

    /// Property: selection size is floor(n × ratio)
    #[test]
    fn prop_selection_size(text in document_strategy(), ratio in 0.01f64..=1.0) {
        let summarizer = Summarizer::english().unwrap();
        let summary = summarizer.summarize(&text, ratio).unwrap();
        let expected = (summary.total_sentences as f64 * ratio).floor() as usize;
        prop_assert_eq!(summary.selected.len(), expected);
    }

    /// Property: compression ratio never divides by zero
    #[test]
    fn prop_compression_ratio_is_finite(input in 0usize..10_000, summary in 0usize..10_000) {
        let ratio = compression_ratio(input, summary);
        prop_assert!(ratio.is_finite());
        if input == 0 {
            prop_assert_eq!(ratio, 0.0);
        }
    }
}
