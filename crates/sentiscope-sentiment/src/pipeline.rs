//! End-to-end orchestration over table files.

use std::path::Path;

use sentiscope_core::AnnotatedPost;

use crate::aggregate::{distribution, LabelCount};
use crate::annotate::Annotator;
use crate::error::SentimentError;
use crate::lexicon::Lexicon;
use crate::table::{read_annotated_posts, read_raw_posts, write_annotated_posts};

/// Outcome of one annotation run.
#[derive(Debug, Clone)]
pub struct AnnotationSummary {
    pub rows: usize,
    pub missing_text: usize,
    pub distribution: Vec<LabelCount>,
}

/// Build an annotator from an optional VADER lexicon file, falling back to
/// the built-in lexicon.
///
/// # Errors
///
/// Returns the lexicon loading error if `lexicon_path` is given but cannot
/// be read or parsed.
pub fn build_annotator(lexicon_path: Option<&Path>) -> Result<Annotator, SentimentError> {
    let lexicon = match lexicon_path {
        Some(path) => {
            let lexicon = Lexicon::from_vader_file(path)?;
            tracing::info!(path = %path.display(), entries = lexicon.len(), "loaded lexicon file");
            lexicon
        }
        None => Lexicon::builtin(),
    };
    Ok(Annotator::with_lexicon(lexicon))
}

/// Read a raw table, annotate every row, and write the annotated table.
///
/// Nothing is written unless the whole input loads.
///
/// # Errors
///
/// Returns [`SentimentError::MissingInput`] if `input` does not exist, or
/// any read/parse/write error from [`crate::table`].
pub fn annotate_table(
    annotator: &Annotator,
    input: &Path,
    output: &Path,
) -> Result<AnnotationSummary, SentimentError> {
    let raw = read_raw_posts(input)?;
    let missing_text = raw.iter().filter(|p| p.text.is_none()).count();
    let annotated = annotator.annotate(raw);
    write_annotated_posts(output, &annotated)?;

    Ok(AnnotationSummary {
        rows: annotated.len(),
        missing_text,
        distribution: distribution(&annotated),
    })
}

/// Load the annotated table the dashboard reads.
///
/// # Errors
///
/// Returns [`SentimentError::MissingInput`] if the table does not exist.
pub fn load_annotated(path: &Path) -> Result<Vec<AnnotatedPost>, SentimentError> {
    let posts = read_annotated_posts(path)?;
    if posts.is_empty() {
        tracing::warn!(path = %path.display(), "annotated table has no rows");
    }
    Ok(posts)
}
