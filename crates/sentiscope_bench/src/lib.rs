//! sentiscope_bench — acceptance scenarios for the standard analyzer.
//!
//! Each scenario pairs a short text with the emotions the bundled lexicon
//! must detect and the sentiment label it must get:
//! - Single emotions, one per lexicon category
//! - Mixed emotions in one text
//! - Per-sentence breakdown of a mixed review

use sentiscope_core::Sentiment::{Negative, Neutral, Positive};
use sentiscope_core::{DocumentResult, Sentiment, SentimentAnalyzer};
use std::path::PathBuf;

pub struct Scenario {
    pub name: &'static str,
    pub text: &'static str,
    /// Every one of these must appear in the overall emotions.
    pub emotions: &'static [&'static str],
    /// Expected overall label.
    pub sentiment: Sentiment,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "emoji + positive",
        text: "I hope you are happy with this! 😀",
        emotions: &["Happy"],
        sentiment: Positive,
    },
    Scenario {
        name: "anger",
        text: "I am furious and angry about this situation.",
        emotions: &["Anger"],
        sentiment: Negative,
    },
    Scenario {
        name: "fear",
        text: "I am so afraid of the ghost.",
        emotions: &["Fear"],
        sentiment: Negative,
    },
    Scenario {
        name: "surprise",
        text: "Wow, I am totally surprised and amazed!",
        emotions: &["Surprise"],
        sentiment: Positive,
    },
    Scenario {
        name: "excitement",
        text: "I am so excited and pumped for the concert!",
        emotions: &["Excitement"],
        sentiment: Positive,
    },
    Scenario {
        name: "questions",
        text: "Why is this happening? I wonder what went wrong.",
        emotions: &["Questions"],
        sentiment: Negative,
    },
    Scenario {
        name: "helplessness",
        text: "I am completely stuck and powerless to change anything.",
        emotions: &["Helplessness"],
        sentiment: Negative,
    },
    Scenario {
        name: "shock",
        text: "OMG! I am absolutely stunned by this wonderful news.",
        emotions: &["Shock"],
        sentiment: Positive,
    },
    Scenario {
        name: "entitlement",
        text: "I deserve the best treatment because I earned it.",
        emotions: &["Entitlement"],
        sentiment: Positive,
    },
    Scenario {
        name: "humbleness",
        text: "It is an honor to serve you, I am truly grateful.",
        emotions: &["Humbleness"],
        sentiment: Positive,
    },
    Scenario {
        name: "arrogance",
        text: "I am superior to everyone else here. I am the best.",
        emotions: &["Arrogance"],
        sentiment: Positive,
    },
    Scenario {
        name: "confidence",
        text: "I am certain we will succeed. I have no doubts.",
        emotions: &["Confidence"],
        sentiment: Positive,
    },
    Scenario {
        name: "stress",
        text: "The deadline is approaching and the pressure is overwhelming.",
        emotions: &["Stress"],
        sentiment: Negative,
    },
    Scenario {
        name: "hope",
        text: "I wish for a better future and pray for success.",
        emotions: &["Hope"],
        sentiment: Positive,
    },
    Scenario {
        name: "dominance",
        text: "You must obey my command immediately!",
        emotions: &["Dominance"],
        sentiment: Neutral,
    },
    Scenario {
        name: "submissiveness",
        text: "I will comply with your request, sorry for the trouble.",
        emotions: &["Submissiveness"],
        sentiment: Negative,
    },
    Scenario {
        name: "stress + hope",
        text: "I am stressed about the exam but hopeful I will pass.",
        emotions: &["Stress", "Hope"],
        sentiment: Positive,
    },
    Scenario {
        name: "questions + anger + humbleness",
        text: "Why did you do that? I am so angry yet humble enough to forgive.",
        emotions: &["Questions", "Anger", "Humbleness"],
        sentiment: Negative,
    },
];

/// The lexicon shipped at the workspace root.
pub fn bundled_lexicon_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/emotions.json")
}

/// Run one scenario and describe every expectation it misses.
pub fn check(analyzer: &SentimentAnalyzer, scenario: &Scenario) -> Result<DocumentResult, String> {
    let doc = analyzer
        .analyze(scenario.text)
        .map_err(|e| format!("{}: analysis failed: {}", scenario.name, e))?;

    let mut failures = Vec::new();
    for emotion in scenario.emotions {
        if !doc.emotions().contains_key(*emotion) {
            failures.push(format!("missing emotion {} in {:?}", emotion, doc.emotions()));
        }
    }
    if doc.sentiment() != scenario.sentiment {
        failures.push(format!(
            "sentiment {} (polarity {}), expected {}",
            doc.sentiment(),
            doc.overall.polarity,
            scenario.sentiment
        ));
    }

    if failures.is_empty() {
        Ok(doc)
    } else {
        Err(format!("{}: {}", scenario.name, failures.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        sentiscope_nlp::standard_builder()
            .lexicon_path(bundled_lexicon_path())
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_scenarios() {
        let analyzer = analyzer();
        let failures: Vec<String> = SCENARIOS
            .iter()
            .filter_map(|s| check(&analyzer, s).err())
            .collect();
        assert!(failures.is_empty(), "Failed scenarios:\n{}", failures.join("\n"));
    }

    /// An exclamation mark alone must not tip a command into Negative.
    #[test]
    fn test_dominance_command_is_neutral() {
        let analyzer = analyzer();
        let scenario = SCENARIOS.iter().find(|s| s.name == "dominance").unwrap();
        let doc = check(&analyzer, scenario).unwrap();
        assert_eq!(doc.sentiment(), Neutral);
        assert_eq!(doc.overall.polarity, 0.0);
    }

    /// Every scenario's profile must be well formed, whatever its labels.
    #[test]
    fn test_scenario_profiles_are_well_formed() {
        let analyzer = analyzer();
        for scenario in SCENARIOS {
            let doc = analyzer.analyze(scenario.text).unwrap();
            assert!((-1.0..=1.0).contains(&doc.overall.polarity));
            assert!((0.0..=1.0).contains(&doc.overall.subjectivity));
            let total: f64 = doc.emotions().values().sum();
            assert!(
                (total - 100.0).abs() <= 0.05 * doc.emotions().len() as f64 + 1e-9,
                "{}: emotions sum to {}",
                scenario.name,
                total
            );
            assert!(!doc.sentence_breakdown.is_empty());
        }
    }

    /// A mixed review: the breakdown should swing from positive to negative.
    #[test]
    fn test_review_breakdown() {
        let analyzer = analyzer();
        let doc = analyzer
            .analyze("The food was fantastic and the staff were wonderful! Sadly the chairs were terrible.")
            .unwrap();

        assert_eq!(doc.sentence_breakdown.len(), 2);
        assert_eq!(doc.sentence_breakdown[0].sentiment, Positive);
        assert_eq!(doc.sentence_breakdown.last().unwrap().sentiment, Negative);
        assert!(doc.sentence_breakdown[0].emotions.contains_key("Happy"));
    }

    #[test]
    fn test_scenarios_cover_every_lexicon_emotion_but_sad() {
        let analyzer = analyzer();
        let covered: Vec<&str> = SCENARIOS.iter().flat_map(|s| s.emotions.iter().copied()).collect();
        for name in analyzer.lexicon().emotion_names() {
            if name == "Sad" {
                continue;
            }
            assert!(covered.contains(&name), "no scenario for {}", name);
        }
    }
}
