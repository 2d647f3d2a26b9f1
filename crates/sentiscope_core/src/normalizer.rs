use crate::{CapabilityError, Lemmatizer, WordTokenizer};
use std::sync::Arc;

/// Lowercase tokens of a segment with their lemmas, position-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub tokens: Vec<String>,
    pub lemmas: Vec<String>,
}

impl NormalizedText {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `(token, lemma)` pairs in text order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .zip(self.lemmas.iter())
            .map(|(t, l)| (t.as_str(), l.as_str()))
    }
}

/// Lowercases a segment, tokenizes it and lemmatizes every token.
#[derive(Clone)]
pub struct Normalizer {
    tokenizer: Arc<dyn WordTokenizer>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Normalizer {
    pub fn new(tokenizer: Arc<dyn WordTokenizer>, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        Self {
            tokenizer,
            lemmatizer,
        }
    }

    pub fn normalize(&self, text: &str) -> Result<NormalizedText, CapabilityError> {
        let lowered = text.to_lowercase();
        let tokens = self.tokenizer.tokenize(&lowered)?;
        let lemmas = tokens
            .iter()
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NormalizedText { tokens, lemmas })
    }
}
