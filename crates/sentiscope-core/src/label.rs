//! Discrete sentiment categories derived from compound scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scores strictly above this are [`SentimentLabel::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Scores strictly below this are [`SentimentLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels, in dashboard display order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Categorize a compound score.
    ///
    /// The inclusive band `[-0.05, 0.05]` is neutral. `NaN` is treated as
    /// neutral since it compares false against both thresholds.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment label: {0}")]
pub struct ParseLabelError(pub String);

impl FromStr for SentimentLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(ParseLabelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.0501), SentimentLabel::Positive);
        assert_eq!(
            SentimentLabel::from_score(-0.0501),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn extremes_map_to_polar_labels() {
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn labels_partition_the_score_range() {
        // Every sampled score falls into exactly one label and the label
        // agrees with the threshold predicates.
        for step in -1000..=1000 {
            let score = f64::from(step) / 1000.0;
            let label = SentimentLabel::from_score(score);
            assert_eq!(label == SentimentLabel::Positive, score > POSITIVE_THRESHOLD);
            assert_eq!(label == SentimentLabel::Negative, score < NEGATIVE_THRESHOLD);
            assert_eq!(
                label == SentimentLabel::Neutral,
                (NEGATIVE_THRESHOLD..=POSITIVE_THRESHOLD).contains(&score)
            );
        }
    }

    #[test]
    fn nan_is_neutral() {
        assert_eq!(SentimentLabel::from_score(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("positive".parse::<SentimentLabel>(), Ok(SentimentLabel::Positive));
        assert_eq!(" Negative ".parse::<SentimentLabel>(), Ok(SentimentLabel::Negative));
        assert_eq!("NEUTRAL".parse::<SentimentLabel>(), Ok(SentimentLabel::Neutral));
        assert!("mixed".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn serializes_as_capitalized_name() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"Negative\"");
    }
}
