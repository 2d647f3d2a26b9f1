//! # Sentiscope Core
//!
//! Turns a block of text into a sentiment profile: overall polarity,
//! subjectivity, a percentage distribution over named emotions, and the same
//! profile recomputed for every sentence.
//!
//! The core owns the orchestration and the emotion scoring. Polarity,
//! subjectivity, tokenization, lemmatization and sentence splitting are
//! consumed through the capability traits below; `sentiscope_nlp` ships the
//! built-in English implementations.

pub mod analyzer;
pub mod config;
pub mod emotion;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod result;
pub mod sentiment;

pub use analyzer::{AnalyzerBuilder, SentimentAnalyzer};
pub use config::SentiscopeConfig;
pub use emotion::EmotionClassifier;
pub use error::{AnalysisError, Capability, CapabilityError, LexiconError};
pub use lexicon::EmotionLexicon;
pub use normalizer::{NormalizedText, Normalizer};
pub use result::{AnalysisResult, DocumentResult};
pub use sentiment::Sentiment;

/// Compound polarity of raw text, in `[-1.0, 1.0]`.
///
/// Receives the text untouched so casing, punctuation and emoji stay visible
/// to the scorer.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, CapabilityError>;
}

/// Subjectivity of raw text, in `[0.0, 1.0]` (0 = factual, 1 = opinion).
pub trait SubjectivityScorer: Send + Sync {
    fn subjectivity(&self, text: &str) -> Result<f64, CapabilityError>;
}

/// Splits text into ordered word and punctuation tokens.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError>;
}

/// Maps a single token to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> Result<String, CapabilityError>;
}

/// Splits text into ordered sentence strings.
pub trait SentenceSegmenter: Send + Sync {
    fn sentences(&self, text: &str) -> Result<Vec<String>, CapabilityError>;
}
