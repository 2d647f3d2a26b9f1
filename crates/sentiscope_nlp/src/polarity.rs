use sentiscope_core::{Capability, CapabilityError, PolarityScorer};
use vader_sentiment::SentimentIntensityAnalyzer;

/// VADER compound polarity, rounded to 4 decimals.
///
/// VADER handles casing, punctuation emphasis, emoji, negation and
/// intensifiers itself, so it must see the raw text.
///
/// `!` and `?` only amplify the sentiment of the words around them. When the
/// text without them scores exactly zero there is nothing to amplify and the
/// result is 0.0. `vader_sentiment` would otherwise push such text negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderPolarity;

impl PolarityScorer for VaderPolarity {
    fn polarity(&self, text: &str) -> Result<f64, CapabilityError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        let analyzer = SentimentIntensityAnalyzer::new();

        let unemphasized: String = text.chars().filter(|c| !matches!(c, '!' | '?')).collect();
        if unemphasized.trim().is_empty() || compound(&analyzer, &unemphasized)? == 0.0 {
            return Ok(0.0);
        }

        let score = compound(&analyzer, text)?;
        Ok((score * 10_000.0).round() / 10_000.0)
    }
}

fn compound(analyzer: &SentimentIntensityAnalyzer, text: &str) -> Result<f64, CapabilityError> {
    analyzer
        .polarity_scores(text)
        .get("compound")
        .copied()
        .ok_or_else(|| CapabilityError::new(Capability::Polarity, "VADER returned no compound score"))
}
