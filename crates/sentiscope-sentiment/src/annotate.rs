//! Row-by-row normalization and scoring of a post table.

use sentiscope_core::{AnnotatedPost, RawPost};

use crate::lexicon::Lexicon;
use crate::normalizer::TextNormalizer;
use crate::scorer::SentimentScorer;
use crate::stopwords::StopwordSet;

/// Applies [`TextNormalizer`] then [`SentimentScorer`] to each post.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    normalizer: TextNormalizer,
    scorer: SentimentScorer,
}

impl Annotator {
    #[must_use]
    pub fn new(normalizer: TextNormalizer, scorer: SentimentScorer) -> Self {
        Self { normalizer, scorer }
    }

    /// English stopwords with the given lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self::new(
            TextNormalizer::new(StopwordSet::english()),
            SentimentScorer::new(lexicon),
        )
    }

    #[must_use]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    #[must_use]
    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    #[must_use]
    pub fn annotate_post(&self, raw: RawPost) -> AnnotatedPost {
        let processed = self.normalizer.normalize(raw.text.as_deref());
        let sentiment = self.scorer.score(&processed);
        AnnotatedPost::new(raw, processed, sentiment.score)
    }

    /// Annotate every post, preserving order and count.
    ///
    /// Posts without text are annotated as empty/neutral rather than
    /// rejected.
    #[must_use]
    pub fn annotate(&self, posts: Vec<RawPost>) -> Vec<AnnotatedPost> {
        let total = posts.len();
        let mut missing_text = 0usize;

        let annotated: Vec<AnnotatedPost> = posts
            .into_iter()
            .enumerate()
            .map(|(row, raw)| {
                if raw.text.is_none() {
                    missing_text += 1;
                    tracing::debug!(row, "post has no text; scoring as empty");
                }
                self.annotate_post(raw)
            })
            .collect();

        if missing_text > 0 {
            tracing::warn!(
                missing_text,
                total,
                "some posts had no text and were scored as neutral"
            );
        }
        tracing::info!(posts = total, "annotated post table");

        annotated
    }
}
