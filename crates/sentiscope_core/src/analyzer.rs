//! Segment and document analysis.
//!
//! [`SentimentAnalyzer`] is the long-lived service object: build it once,
//! share it (it is `Send + Sync`), call [`SentimentAnalyzer::analyze`] as
//! often as needed. Nothing is retained between calls.

use crate::emotion::EmotionClassifier;
use crate::error::{AnalysisError, Capability, CapabilityError};
use crate::lexicon::EmotionLexicon;
use crate::normalizer::Normalizer;
use crate::result::{AnalysisResult, DocumentResult};
use crate::sentiment::{round_to, Sentiment};
use crate::{Lemmatizer, PolarityScorer, SentenceSegmenter, SubjectivityScorer, WordTokenizer};
use std::path::PathBuf;
use std::sync::Arc;

pub struct SentimentAnalyzer {
    normalizer: Normalizer,
    polarity: Arc<dyn PolarityScorer>,
    subjectivity: Arc<dyn SubjectivityScorer>,
    segmenter: Arc<dyn SentenceSegmenter>,
    classifier: EmotionClassifier,
}

impl SentimentAnalyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    pub fn lexicon(&self) -> &EmotionLexicon {
        self.classifier.lexicon()
    }

    /// Profile the whole text, then every sentence of it in order.
    pub fn analyze(&self, text: &str) -> Result<DocumentResult, AnalysisError> {
        let overall = self.analyze_segment(text)?;

        let sentences = self.segmenter.sentences(text)?;
        let sentence_breakdown = sentences
            .iter()
            .map(|sentence| self.analyze_segment(sentence))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            sentences = sentence_breakdown.len(),
            sentiment = %overall.sentiment,
            "Analyzed document"
        );

        Ok(DocumentResult {
            overall,
            sentence_breakdown,
        })
    }

    /// Profile a single span of text (a whole document or one sentence).
    pub fn analyze_segment(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let normalized = self.normalizer.normalize(text)?;

        let compound = checked_score(
            self.polarity.polarity(text)?,
            Capability::Polarity,
            -1.0,
            1.0,
        )?;
        let subjectivity = checked_score(
            self.subjectivity.subjectivity(text)?,
            Capability::Subjectivity,
            0.0,
            1.0,
        )?;
        let emotions = self.classifier.classify(&normalized);

        tracing::trace!(
            tokens = normalized.len(),
            compound,
            subjectivity,
            emotions = emotions.len(),
            "Analyzed segment"
        );

        Ok(AnalysisResult {
            text: text.to_string(),
            polarity: round_to(compound, 2),
            subjectivity: round_to(subjectivity, 2),
            // Thresholds apply to the unrounded compound score
            sentiment: Sentiment::from_polarity(compound),
            emotions,
        })
    }
}

/// Reject NaN/infinite scores and pin the rest to the documented range.
fn checked_score(
    score: f64,
    capability: Capability,
    min: f64,
    max: f64,
) -> Result<f64, CapabilityError> {
    if !score.is_finite() {
        return Err(CapabilityError::new(
            capability,
            format!("non-finite score {}", score),
        ));
    }
    Ok(score.clamp(min, max))
}

// ============================================================================
// Builder
// ============================================================================

enum LexiconSource {
    Ready(EmotionLexicon),
    Path(PathBuf),
}

/// Assembles a [`SentimentAnalyzer`] from its capabilities and lexicon.
///
/// Every capability is required. The lexicon defaults to empty; a lexicon
/// path that cannot be loaded also yields an empty lexicon (logged).
#[derive(Default)]
pub struct AnalyzerBuilder {
    lexicon: Option<LexiconSource>,
    polarity: Option<Arc<dyn PolarityScorer>>,
    subjectivity: Option<Arc<dyn SubjectivityScorer>>,
    tokenizer: Option<Arc<dyn WordTokenizer>>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
}

impl AnalyzerBuilder {
    pub fn lexicon(mut self, lexicon: EmotionLexicon) -> Self {
        self.lexicon = Some(LexiconSource::Ready(lexicon));
        self
    }

    /// Read the lexicon from a JSON file at build time.
    pub fn lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon = Some(LexiconSource::Path(path.into()));
        self
    }

    pub fn polarity_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.polarity = Some(Arc::new(scorer));
        self
    }

    pub fn subjectivity_scorer(mut self, scorer: impl SubjectivityScorer + 'static) -> Self {
        self.subjectivity = Some(Arc::new(scorer));
        self
    }

    pub fn tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    pub fn lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Some(Arc::new(lemmatizer));
        self
    }

    pub fn segmenter(mut self, segmenter: impl SentenceSegmenter + 'static) -> Self {
        self.segmenter = Some(Arc::new(segmenter));
        self
    }

    pub fn build(self) -> anyhow::Result<SentimentAnalyzer> {
        let polarity = self
            .polarity
            .ok_or_else(|| anyhow::anyhow!("SentimentAnalyzer needs a polarity scorer"))?;
        let subjectivity = self
            .subjectivity
            .ok_or_else(|| anyhow::anyhow!("SentimentAnalyzer needs a subjectivity scorer"))?;
        let tokenizer = self
            .tokenizer
            .ok_or_else(|| anyhow::anyhow!("SentimentAnalyzer needs a tokenizer"))?;
        let lemmatizer = self
            .lemmatizer
            .ok_or_else(|| anyhow::anyhow!("SentimentAnalyzer needs a lemmatizer"))?;
        let segmenter = self
            .segmenter
            .ok_or_else(|| anyhow::anyhow!("SentimentAnalyzer needs a sentence segmenter"))?;

        let lexicon = match self.lexicon {
            Some(LexiconSource::Ready(lexicon)) => lexicon,
            Some(LexiconSource::Path(path)) => EmotionLexicon::load_or_empty(path),
            None => EmotionLexicon::empty(),
        };
        tracing::debug!("Building SentimentAnalyzer with {} emotions", lexicon.len());

        Ok(SentimentAnalyzer {
            normalizer: Normalizer::new(tokenizer, lemmatizer),
            polarity,
            subjectivity,
            segmenter,
            classifier: EmotionClassifier::new(Arc::new(lexicon)),
        })
    }
}
