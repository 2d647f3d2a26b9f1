//! Pattern-style subjectivity.
//!
//! Each known opinion word contributes its subjectivity; an intensifier
//! directly in front of it scales that value. The segment score is the mean
//! over all contributions, or 0.0 when nothing opinionated was found.

use sentiscope_core::{CapabilityError, SubjectivityScorer};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternSubjectivity;

impl SubjectivityScorer for PatternSubjectivity {
    fn subjectivity(&self, text: &str) -> Result<f64, CapabilityError> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .collect();

        let mut total = 0.0;
        let mut hits = 0usize;
        for (i, word) in words.iter().enumerate() {
            let Some(&base) = OPINION_WORDS.get(word) else {
                continue;
            };
            let boost = i
                .checked_sub(1)
                .and_then(|prev| INTENSIFIER_WORDS.get(words[prev]))
                .copied()
                .unwrap_or(1.0);
            total += (base * boost).min(1.0);
            hits += 1;
        }

        if hits == 0 {
            return Ok(0.0);
        }
        Ok((total / hits as f64).clamp(0.0, 1.0))
    }
}

static OPINION_WORDS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| SUBJECTIVITY.iter().copied().collect());

static INTENSIFIER_WORDS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("completely", 1.3),
    ("deeply", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("so", 1.3),
    ("terribly", 1.3),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

const SUBJECTIVITY: &[(&str, f64)] = &[
    ("afraid", 0.9),
    ("amazed", 0.9),
    ("amazing", 0.9),
    ("angry", 1.0),
    ("annoyed", 0.8),
    ("annoying", 0.8),
    ("anxious", 0.75),
    ("arrogant", 0.9),
    ("ashamed", 0.9),
    ("awesome", 1.0),
    ("awful", 1.0),
    ("bad", 0.67),
    ("beautiful", 1.0),
    ("best", 0.3),
    ("better", 0.5),
    ("bitter", 0.8),
    ("boring", 1.0),
    ("brilliant", 1.0),
    ("calm", 0.75),
    ("certain", 0.57),
    ("cheerful", 0.8),
    ("clever", 0.6),
    ("comfortable", 0.75),
    ("confident", 0.85),
    ("confused", 0.7),
    ("crazy", 0.9),
    ("cruel", 1.0),
    ("curious", 1.0),
    ("cute", 1.0),
    ("dangerous", 0.9),
    ("delighted", 1.0),
    ("delightful", 1.0),
    ("depressed", 0.6),
    ("desperate", 0.8),
    ("difficult", 1.0),
    ("disappointed", 0.75),
    ("disappointing", 0.7),
    ("disgusting", 1.0),
    ("dreadful", 1.0),
    ("dull", 0.9),
    ("eager", 0.75),
    ("easy", 0.83),
    ("embarrassed", 0.8),
    ("excellent", 1.0),
    ("excited", 0.75),
    ("exciting", 0.8),
    ("exhausted", 0.8),
    ("fabulous", 0.9),
    ("fantastic", 0.9),
    ("fine", 0.5),
    ("fortunate", 0.8),
    ("frightened", 0.9),
    ("frustrated", 0.7),
    ("fun", 0.2),
    ("funny", 1.0),
    ("furious", 1.0),
    ("glad", 1.0),
    ("good", 0.6),
    ("gorgeous", 1.0),
    ("grateful", 0.75),
    ("great", 0.75),
    ("guilty", 0.8),
    ("happy", 1.0),
    ("hard", 0.54),
    ("hateful", 1.0),
    ("helpless", 0.8),
    ("honest", 0.9),
    ("hopeful", 0.9),
    ("hopeless", 0.8),
    ("horrible", 1.0),
    ("humble", 0.6),
    ("important", 1.0),
    ("impossible", 1.0),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("jealous", 0.8),
    ("kind", 0.9),
    ("lazy", 0.8),
    ("lonely", 0.8),
    ("lovely", 0.75),
    ("lucky", 1.0),
    ("mad", 1.0),
    ("magnificent", 1.0),
    ("marvelous", 1.0),
    ("miserable", 0.8),
    ("nasty", 1.0),
    ("nervous", 1.0),
    ("nice", 1.0),
    ("overwhelming", 0.7),
    ("pathetic", 1.0),
    ("perfect", 1.0),
    ("pleasant", 0.7),
    ("pleased", 0.7),
    ("poor", 0.6),
    ("powerless", 0.7),
    ("pretty", 1.0),
    ("proud", 1.0),
    ("ridiculous", 1.0),
    ("sad", 1.0),
    ("scared", 0.9),
    ("scary", 1.0),
    ("shocked", 0.9),
    ("silly", 1.0),
    ("sorry", 1.0),
    ("strange", 0.15),
    ("stressed", 0.8),
    ("stunned", 0.8),
    ("stupid", 1.0),
    ("successful", 0.95),
    ("superior", 0.9),
    ("sure", 0.89),
    ("surprised", 0.8),
    ("surprising", 0.9),
    ("terrible", 1.0),
    ("terrific", 1.0),
    ("thankful", 0.8),
    ("thrilled", 0.9),
    ("tired", 0.7),
    ("ugly", 1.0),
    ("unbelievable", 0.9),
    ("unfair", 0.9),
    ("unhappy", 0.7),
    ("upset", 0.8),
    ("useless", 0.2),
    ("weird", 1.0),
    ("wonderful", 1.0),
    ("worried", 0.9),
    ("worse", 0.6),
    ("worst", 1.0),
    ("wrong", 0.9),
];
