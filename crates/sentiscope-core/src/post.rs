//! Social-media post records before and after annotation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::label::SentimentLabel;

/// Canonical output format for post timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One ingested row: a timestamp and the raw post text.
///
/// `text` is `None` when the source cell was missing or empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPost {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDateTime,
    pub text: Option<String>,
}

impl RawPost {
    #[must_use]
    pub fn new(date: NaiveDateTime, text: Option<String>) -> Self {
        Self { date, text }
    }
}

/// A post enriched with its normalized text and sentiment.
///
/// Fields are read-only after construction; the label is always derived
/// from the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedPost {
    #[serde(serialize_with = "serialize_date")]
    date: NaiveDateTime,
    text: Option<String>,
    processed_text: String,
    score: f64,
    label: SentimentLabel,
}

impl AnnotatedPost {
    #[must_use]
    pub fn new(raw: RawPost, processed_text: String, score: f64) -> Self {
        Self {
            date: raw.date,
            text: raw.text,
            processed_text,
            score,
            label: SentimentLabel::from_score(score),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Calendar day used for daily aggregation.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn processed_text(&self) -> &str {
        &self.processed_text
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn label(&self) -> SentimentLabel {
        self.label
    }
}

/// Parse a post timestamp.
///
/// Accepts a bare date, a date with time (space or `T` separated, optional
/// fractional seconds), or RFC 3339 with an offset, which is converted to
/// UTC wall-clock time. Returns `None` for anything else.
#[must_use]
pub fn parse_post_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[must_use]
pub fn format_post_date(date: NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn serialize_date<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_post_date(*date))
}
