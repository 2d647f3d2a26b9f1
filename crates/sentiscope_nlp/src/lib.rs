//! # Sentiscope NLP primitives
//!
//! English implementations of the capabilities `sentiscope_core` consumes:
//!
//! - **Polarity**: VADER compound score (`vader_sentiment`), emoji aware
//! - **Subjectivity**: pattern-style adjective lexicon with intensifiers
//! - **Tokenizer**: Treebank-style words, punctuation and clitics
//! - **Lemmatizer**: noun base forms via suffix rules and irregular forms
//! - **Segmenter**: sentence boundaries on terminal punctuation
//!
//! All of them are stateless unit structs, safe to share across threads.

mod lemmatizer;
mod polarity;
mod segmenter;
mod subjectivity;
mod tokenizer;

pub use lemmatizer::RuleLemmatizer;
pub use polarity::VaderPolarity;
pub use segmenter::PunctSegmenter;
pub use subjectivity::PatternSubjectivity;
pub use tokenizer::TreebankTokenizer;

use sentiscope_core::{AnalyzerBuilder, SentimentAnalyzer, SentiscopeConfig};

/// Builder pre-wired with every built-in capability. The lexicon is left
/// for the caller to set.
pub fn standard_builder() -> AnalyzerBuilder {
    SentimentAnalyzer::builder()
        .polarity_scorer(VaderPolarity)
        .subjectivity_scorer(PatternSubjectivity)
        .tokenizer(TreebankTokenizer)
        .lemmatizer(RuleLemmatizer)
        .segmenter(PunctSegmenter)
}

/// The analyzer a deployment runs with: built-in capabilities plus the
/// lexicon at `config.lexicon.path` (empty if it cannot be loaded).
pub fn standard_analyzer(config: &SentiscopeConfig) -> anyhow::Result<SentimentAnalyzer> {
    tracing::info!("Initializing analyzer with lexicon {}", config.lexicon.path.display());
    standard_builder()
        .lexicon_path(config.lexicon.path.clone())
        .build()
}
