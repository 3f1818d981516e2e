//! Dashboard aggregations over an annotated post table.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use sentiscope_core::{AnnotatedPost, SentimentLabel};
use serde::Serialize;

/// Mean compound score for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySentiment {
    pub day: NaiveDate,
    pub mean_score: f64,
    pub post_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: SentimentLabel,
    pub count: usize,
}

/// Headline numbers for the whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub total_posts: usize,
    pub average_score: f64,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word counts for one sentiment category, or a placeholder when the
/// category has no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordFrequencies {
    Words { words: Vec<WordCount> },
    Empty { message: String },
}

impl WordFrequencies {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, WordFrequencies::Empty { .. })
    }

    /// Counted words, or an empty slice for the placeholder.
    #[must_use]
    pub fn words(&self) -> &[WordCount] {
        match self {
            WordFrequencies::Words { words } => words,
            WordFrequencies::Empty { .. } => &[],
        }
    }
}

/// Everything the dashboard displays, computed in one pass over the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub metrics: KeyMetrics,
    pub trend: Vec<DailySentiment>,
    pub distribution: Vec<LabelCount>,
    pub positive_words: WordFrequencies,
    pub negative_words: WordFrequencies,
    pub sample: Vec<AnnotatedPost>,
}

impl Dashboard {
    #[must_use]
    pub fn build(posts: &[AnnotatedPost], word_limit: usize, sample_rows: usize) -> Self {
        Self {
            metrics: key_metrics(posts),
            trend: daily_trend(posts),
            distribution: distribution(posts),
            positive_words: word_frequencies(posts, SentimentLabel::Positive, word_limit),
            negative_words: word_frequencies(posts, SentimentLabel::Negative, word_limit),
            sample: posts.iter().take(sample_rows).cloned().collect(),
        }
    }
}

/// Average score per calendar day, ascending. Days without posts are omitted.
#[must_use]
pub fn daily_trend(posts: &[AnnotatedPost]) -> Vec<DailySentiment> {
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for post in posts {
        let entry = by_day.entry(post.day()).or_insert((0.0, 0));
        entry.0 += post.score();
        entry.1 += 1;
    }

    by_day
        .into_iter()
        .map(|(day, (sum, count))| {
            #[allow(clippy::cast_precision_loss)]
            let mean_score = sum / count as f64;
            DailySentiment {
                day,
                mean_score,
                post_count: count,
            }
        })
        .collect()
}

/// Post count per label, always listing all three labels.
#[must_use]
pub fn distribution(posts: &[AnnotatedPost]) -> Vec<LabelCount> {
    SentimentLabel::ALL
        .iter()
        .map(|&label| LabelCount {
            label,
            count: posts.iter().filter(|p| p.label() == label).count(),
        })
        .collect()
}

/// Table-wide averages. An empty table yields all zeros.
#[must_use]
pub fn key_metrics(posts: &[AnnotatedPost]) -> KeyMetrics {
    let total_posts = posts.len();
    if total_posts == 0 {
        return KeyMetrics {
            total_posts: 0,
            average_score: 0.0,
            positive_pct: 0.0,
            negative_pct: 0.0,
            neutral_pct: 0.0,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total_posts as f64;
    #[allow(clippy::cast_precision_loss)]
    let pct = |label: SentimentLabel| {
        posts.iter().filter(|p| p.label() == label).count() as f64 / total * 100.0
    };

    KeyMetrics {
        total_posts,
        average_score: posts.iter().map(AnnotatedPost::score).sum::<f64>() / total,
        positive_pct: pct(SentimentLabel::Positive),
        negative_pct: pct(SentimentLabel::Negative),
        neutral_pct: pct(SentimentLabel::Neutral),
    }
}

/// Most frequent normalized words among posts with `label`.
///
/// Sorted by count descending, ties broken alphabetically, truncated to
/// `limit`. Returns the placeholder when the category has no words.
#[must_use]
pub fn word_frequencies(
    posts: &[AnnotatedPost],
    label: SentimentLabel,
    limit: usize,
) -> WordFrequencies {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts.iter().filter(|p| p.label() == label) {
        for word in post.processed_text().split_whitespace() {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    if counts.is_empty() {
        tracing::debug!(%label, "no text for word frequencies");
        return WordFrequencies::Empty {
            message: empty_category_message(label),
        };
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(limit);

    WordFrequencies::Words { words }
}

fn empty_category_message(label: SentimentLabel) -> String {
    format!("No {} text found.", label.as_str().to_lowercase())
}
