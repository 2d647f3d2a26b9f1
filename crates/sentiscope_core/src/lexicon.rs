//! Emotion lexicon: emotion name → set of lowercase trigger keywords.
//!
//! Built once when the analyzer is constructed and never mutated afterwards.
//! An empty lexicon is a valid degraded state: emotion detection reports
//! nothing while polarity and subjectivity keep working.

use crate::error::LexiconError;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmotionLexicon {
    emotions: BTreeMap<String, BTreeSet<String>>,
}

impl EmotionLexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from (emotion, keywords) pairs.
    ///
    /// Keywords are trimmed and lowercased, blank ones are dropped, and an
    /// emotion left without keywords is skipped. Repeated emotion names merge.
    pub fn from_entries<I, K, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, W)>,
        K: Into<String>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        let mut emotions: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (name, words) in entries {
            let name = name.into();
            let keywords: BTreeSet<String> = words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
            if keywords.is_empty() {
                tracing::debug!("Lexicon emotion '{}' has no usable keywords, skipping", name);
                continue;
            }
            emotions.entry(name).or_default().extend(keywords);
        }
        Self { emotions }
    }

    /// Parse the JSON resource format: `{"Emotion": ["keyword", ...], ...}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json_str(&content).map_err(|source| LexiconError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            "Loaded emotion lexicon from {} ({} emotions, {} keywords)",
            path.display(),
            lexicon.len(),
            lexicon.keyword_count()
        );
        Ok(lexicon)
    }

    /// Load from `path`, degrading to an empty lexicon on any failure.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!("{}; emotion detection disabled", e);
                Self::empty()
            }
        }
    }

    /// Number of emotions.
    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    pub fn keyword_count(&self) -> usize {
        self.emotions.values().map(BTreeSet::len).sum()
    }

    /// Emotion names in sorted order.
    pub fn emotion_names(&self) -> impl Iterator<Item = &str> {
        self.emotions.keys().map(String::as_str)
    }

    pub fn keywords(&self, emotion: &str) -> Option<&BTreeSet<String>> {
        self.emotions.get(emotion)
    }

    /// Every emotion whose keyword set contains `word` exactly.
    pub fn emotions_matching<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.emotions
            .iter()
            .filter(move |(_, keywords)| keywords.contains(word))
            .map(|(name, _)| name.as_str())
    }
}
