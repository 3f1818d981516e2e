//! `annotate` and `score` command handlers.

use std::path::Path;

use anyhow::Context;
use sentiscope_core::AppConfig;
use sentiscope_sentiment::{annotate_table, build_annotator, Annotator, SentimentError};

use crate::dataset_error;

fn load_annotator(config: &AppConfig) -> anyhow::Result<Annotator> {
    build_annotator(config.lexicon_path.as_deref()).with_context(|| {
        format!(
            "failed to load lexicon from {}",
            config
                .lexicon_path
                .as_deref()
                .map_or_else(|| "<builtin>".to_string(), |p| p.display().to_string())
        )
    })
}

/// Annotate the raw table at `input` and write the result to `output`.
///
/// # Errors
///
/// Returns an error if the lexicon or the input table cannot be loaded, or
/// the output cannot be written.
pub(crate) fn run_annotate(config: &AppConfig, input: &Path, output: &Path) -> anyhow::Result<()> {
    let annotator = load_annotator(config)?;
    let summary = annotate_table(&annotator, input, output).map_err(|e| match e {
        SentimentError::MissingInput(_) => dataset_error(e),
        other => anyhow::Error::new(other).context("annotation failed"),
    })?;

    println!(
        "annotated {} rows ({} without text) -> {}",
        summary.rows,
        summary.missing_text,
        output.display()
    );
    for count in &summary.distribution {
        println!("  {:<8} {}", count.label.as_str(), count.count);
    }
    Ok(())
}

/// Normalize and score a single text, printing each stage.
///
/// # Errors
///
/// Returns an error if a configured lexicon file cannot be loaded.
pub(crate) fn run_score(config: &AppConfig, text: &str, raw: bool) -> anyhow::Result<()> {
    let annotator = load_annotator(config)?;
    let processed = if raw {
        text.to_string()
    } else {
        annotator.normalizer().normalize(Some(text))
    };
    let sentiment = annotator.scorer().score(&processed);

    println!("processed: {processed}");
    println!("score:     {:.4}", sentiment.score);
    println!("label:     {}", sentiment.label);
    Ok(())
}
