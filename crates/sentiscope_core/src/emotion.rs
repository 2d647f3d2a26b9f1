//! Bag-of-words emotion scoring against the lexicon.
//!
//! Hits are counted in two explicit passes:
//! 1. every lemma is looked up;
//! 2. every surface token that differs from the lemma at its own position is
//!    looked up as well, which catches keywords stored in inflected form.
//!    A token equal to its lemma was already counted in pass 1 and is skipped.
//!
//! Raw counts become percentages of the total hit count. No weighting, no
//! smoothing, no negation awareness.

use crate::lexicon::EmotionLexicon;
use crate::normalizer::NormalizedText;
use crate::sentiment::round_to;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    lexicon: Arc<EmotionLexicon>,
}

impl EmotionClassifier {
    pub fn new(lexicon: Arc<EmotionLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &EmotionLexicon {
        &self.lexicon
    }

    /// Raw hit count per emotion. Emotions with no hits are absent.
    pub fn count_hits(&self, text: &NormalizedText) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        if self.lexicon.is_empty() {
            return counts;
        }

        // Pass 1: lemmas
        for lemma in &text.lemmas {
            for emotion in self.lexicon.emotions_matching(lemma) {
                *counts.entry(emotion.to_string()).or_insert(0) += 1;
            }
        }

        // Pass 2: surface forms not already counted through their lemma
        for (token, lemma) in text.pairs() {
            let already_counted = token == lemma;
            if already_counted {
                continue;
            }
            for emotion in self.lexicon.emotions_matching(token) {
                *counts.entry(emotion.to_string()).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Emotion distribution in percent, rounded to one decimal.
    ///
    /// Empty when nothing matched; no placeholder entry is synthesized.
    pub fn classify(&self, text: &NormalizedText) -> BTreeMap<String, f64> {
        let counts = self.count_hits(text);
        let total: usize = counts.values().sum();
        if total == 0 {
            return BTreeMap::new();
        }
        counts
            .into_iter()
            .map(|(emotion, count)| {
                let pct = round_to(count as f64 / total as f64 * 100.0, 1);
                (emotion, pct)
            })
            .collect()
    }
}
