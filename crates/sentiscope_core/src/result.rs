use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentiment profile of a single segment (the whole document or one sentence).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analyzed segment, verbatim.
    pub text: String,
    /// Compound polarity in `[-1.0, 1.0]`, rounded to 2 decimals.
    pub polarity: f64,
    /// Subjectivity in `[0.0, 1.0]`, rounded to 2 decimals.
    pub subjectivity: f64,
    pub sentiment: Sentiment,
    /// Emotion name → share of lexicon hits in percent, rounded to 1 decimal.
    /// Empty when no keyword matched.
    pub emotions: BTreeMap<String, f64>,
}

/// Whole-document profile plus the per-sentence breakdown.
///
/// Serializes flat: the overall fields sit beside `sentence_breakdown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    #[serde(flatten)]
    pub overall: AnalysisResult,
    pub sentence_breakdown: Vec<AnalysisResult>,
}

impl DocumentResult {
    pub fn sentiment(&self) -> Sentiment {
        self.overall.sentiment
    }

    pub fn emotions(&self) -> &BTreeMap<String, f64> {
        &self.overall.emotions
    }
}
