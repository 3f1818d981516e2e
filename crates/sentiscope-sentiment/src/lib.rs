//! Text normalization, lexicon sentiment scoring, and dashboard aggregation.
//!
//! Raw posts are cleaned by [`TextNormalizer`], scored by
//! [`SentimentScorer`] against a read-only [`Lexicon`], and annotated row by
//! row by [`Annotator`]. The [`aggregate`] module turns the annotated table
//! into the daily trend, label distribution, and word-frequency views.

pub mod aggregate;
pub mod annotate;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod scorer;
pub mod stopwords;
pub mod table;

pub use aggregate::{Dashboard, DailySentiment, KeyMetrics, LabelCount, WordCount, WordFrequencies};
pub use annotate::Annotator;
pub use error::SentimentError;
pub use lexicon::Lexicon;
pub use normalizer::TextNormalizer;
pub use pipeline::{annotate_table, build_annotator, load_annotated, AnnotationSummary};
pub use scorer::{Sentiment, SentimentScorer};
pub use stopwords::StopwordSet;
