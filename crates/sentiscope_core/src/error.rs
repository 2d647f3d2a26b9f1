use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which consumed capability failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Polarity,
    Subjectivity,
    Tokenizer,
    Lemmatizer,
    Segmenter,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Polarity => "polarity scorer",
            Capability::Subjectivity => "subjectivity scorer",
            Capability::Tokenizer => "tokenizer",
            Capability::Lemmatizer => "lemmatizer",
            Capability::Segmenter => "sentence segmenter",
        };
        f.write_str(name)
    }
}

/// A scoring, tokenization or segmentation primitive failed.
///
/// There is no safe fallback for a broken primitive, so this always aborts
/// the current analysis call.
#[derive(Debug, Clone, Error)]
#[error("{capability} failed: {message}")]
pub struct CapabilityError {
    pub capability: Capability,
    pub message: String,
}

impl CapabilityError {
    pub fn new(capability: Capability, message: impl Into<String>) -> Self {
        Self {
            capability,
            message: message.into(),
        }
    }
}

/// Failure of a single `analyze` / `analyze_segment` call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

/// The emotion lexicon could not be read or parsed.
///
/// Only returned by [`EmotionLexicon::load`](crate::EmotionLexicon::load);
/// analyzer construction goes through `load_or_empty` and degrades instead.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
