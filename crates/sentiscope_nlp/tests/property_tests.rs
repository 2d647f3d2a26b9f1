//! Property-based tests for the built-in capabilities.
//!
//! Inputs are ASCII sentences built from a small word pool plus punctuation,
//! which is enough to exercise every tokenizer, lemmatizer and segmenter
//! branch.

use proptest::prelude::*;
use sentiscope_core::{
    Lemmatizer, PolarityScorer, SentenceSegmenter, SubjectivityScorer, WordTokenizer,
};
use sentiscope_nlp::{
    standard_builder, PatternSubjectivity, PunctSegmenter, RuleLemmatizer, TreebankTokenizer,
    VaderPolarity,
};

// ============================================================================
// Strategies
// ============================================================================

const WORDS: &[&str] = &[
    "i", "am", "so", "happy", "sad", "furious", "ghosts", "don't", "can't", "very", "not",
    "good", "terrible", "wonderful", "the", "deadline", "Dr.", "OMG", "why", "hope",
];

fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(WORDS).prop_map(str::to_string),
        "[a-z]{1,10}",
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (arb_word(), prop::sample::select(&[" ", " ", ", ", ". ", "! ", "? ", "... "][..])),
        0..20,
    )
    .prop_map(|parts| parts.into_iter().map(|(w, sep)| format!("{}{}", w, sep)).collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn polarity_in_range(text in arb_text()) {
        let score = VaderPolarity.polarity(&text).unwrap();
        prop_assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn subjectivity_in_range(text in arb_text()) {
        let score = PatternSubjectivity.subjectivity(&text).unwrap();
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn tokens_are_non_blank(text in arb_text()) {
        for token in TreebankTokenizer.tokenize(&text).unwrap() {
            prop_assert!(!token.trim().is_empty());
            prop_assert!(!token.contains(char::is_whitespace));
        }
    }

    #[test]
    fn lemma_never_longer_than_regular_word(word in "[a-z]{1,12}") {
        let lemma = RuleLemmatizer.lemmatize(&word).unwrap();
        prop_assert!(!lemma.is_empty());
        prop_assert!(lemma.len() <= word.len());
    }

    #[test]
    fn sentences_cover_all_words(text in arb_text()) {
        let sentences = PunctSegmenter.sentences(&text).unwrap();
        let original: Vec<&str> = text.split_whitespace().collect();
        let rejoined: Vec<String> = sentences
            .iter()
            .flat_map(|s| s.split_whitespace().map(str::to_string))
            .collect();
        prop_assert_eq!(original, rejoined);
        for sentence in &sentences {
            prop_assert_eq!(sentence.trim(), sentence.as_str());
            prop_assert!(!sentence.is_empty());
        }
    }

    #[test]
    fn breakdown_matches_segmenter(text in arb_text()) {
        let analyzer = standard_builder().build().unwrap();
        let doc = analyzer.analyze(&text).unwrap();
        let sentences = PunctSegmenter.sentences(&text).unwrap();
        prop_assert_eq!(doc.sentence_breakdown.len(), sentences.len());
        for (result, sentence) in doc.sentence_breakdown.iter().zip(&sentences) {
            prop_assert_eq!(&result.text, sentence);
            prop_assert!((-1.0..=1.0).contains(&result.polarity));
        }
    }
}
