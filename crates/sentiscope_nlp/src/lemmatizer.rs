//! Noun lemmatizer in the spirit of WordNet's morphy.
//!
//! Irregular plurals come from a fixed table; regular plurals lose their
//! inflectional suffix. Words that only look plural (`stress`, `news`,
//! `analysis`) are left alone. Verbs and adjectives pass through unchanged,
//! matching a noun-only lemmatizer.

use sentiscope_core::{CapabilityError, Lemmatizer};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, token: &str) -> Result<String, CapabilityError> {
        Ok(noun_lemma(token))
    }
}

static IRREGULAR_PLURALS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR.iter().copied().collect());

static NON_PLURALS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INVARIANT.iter().copied().collect());

pub(crate) fn noun_lemma(word: &str) -> String {
    if let Some(base) = IRREGULAR_PLURALS.get(word) {
        return base.to_string();
    }
    if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }
    if NON_PLURALS.contains(word) || ["ss", "us", "is", "ics"].iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        // "ties" -> "tie", "worries" -> "worry"
        if stem.len() > 1 {
            return format!("{}y", stem);
        }
        return format!("{}ie", stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with("ss") || stem.ends_with('x') || stem.ends_with("zz") {
            return stem.to_string();
        }
        if (stem.ends_with("ch") || stem.ends_with("sh")) && !is_che_noun(stem) {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }
    word.to_string()
}

/// Nouns whose singular ends in "-che"/"-she", so only the "s" goes.
fn is_che_noun(stem: &str) -> bool {
    CHE_NOUNS.iter().any(|n| stem.ends_with(n))
}

const CHE_NOUNS: &[&str] = &[
    "avalanch", "backach", "cach", "clich", "crech", "earach", "fich", "headach",
    "moustach", "mustach", "nich", "panach", "psych", "quich", "toothach",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("phenomena", "phenomenon"),
    ("criteria", "criterion"),
    ("oxen", "ox"),
    ("dice", "die"),
];

const INVARIANT: &[&str] = &[
    "always", "basis", "bias", "bonus", "canvas", "chaos", "christmas", "downstairs",
    "glasses", "indoors", "lens", "means", "news", "nowadays", "outdoors", "overseas",
    "perhaps", "series", "sometimes", "species", "thanks", "towards", "upstairs", "whereas",
    "yes",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(noun_lemma("ghosts"), "ghost");
        assert_eq!(noun_lemma("doubts"), "doubt");
        assert_eq!(noun_lemma("tears"), "tear");
        assert_eq!(noun_lemma("houses"), "house");
    }

    #[test]
    fn test_sibilant_plurals() {
        assert_eq!(noun_lemma("classes"), "class");
        assert_eq!(noun_lemma("boxes"), "box");
        assert_eq!(noun_lemma("watches"), "watch");
        assert_eq!(noun_lemma("beaches"), "beach");
        assert_eq!(noun_lemma("wishes"), "wish");
        assert_eq!(noun_lemma("buzzes"), "buzz");
        assert_eq!(noun_lemma("headaches"), "headache");
        assert_eq!(noun_lemma("niches"), "niche");
    }

    #[test]
    fn test_ies_plurals() {
        assert_eq!(noun_lemma("worries"), "worry");
        assert_eq!(noun_lemma("ties"), "tie");
    }

    #[test]
    fn test_irregular() {
        assert_eq!(noun_lemma("children"), "child");
        assert_eq!(noun_lemma("women"), "woman");
        assert_eq!(noun_lemma("lives"), "life");
    }

    #[test]
    fn test_words_left_alone() {
        for word in ["stress", "happiness", "news", "analysis", "was", "its", "furious", "politics", "happy"] {
            assert_eq!(noun_lemma(word), word, "{} should not change", word);
        }
    }

    #[test]
    fn test_non_alphabetic_tokens_pass_through() {
        for token in ["!", "n't", "'s", "😀", "2024s", "well-knowns"] {
            assert_eq!(noun_lemma(token), token);
        }
    }

    #[test]
    fn test_lemmatizer_trait() {
        assert_eq!(RuleLemmatizer.lemmatize("hopes").unwrap(), "hope");
    }
}
