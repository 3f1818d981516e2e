//! `report` command: the dashboard rendered as markdown.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use sentiscope_core::post::format_post_date;
use sentiscope_core::AppConfig;
use sentiscope_sentiment::{load_annotated, Dashboard, WordFrequencies};

use crate::dataset_error;

const SAMPLE_TEXT_WIDTH: usize = 80;

/// Load the annotated table at `input` and print the markdown report.
///
/// # Errors
///
/// Returns an error if the table does not exist or cannot be parsed.
pub(crate) fn run_report(config: &AppConfig, input: &Path, words: usize) -> anyhow::Result<()> {
    let posts = load_annotated(input).map_err(dataset_error)?;

    if posts.is_empty() {
        println!("no posts to report; run `annotate` first");
        return Ok(());
    }

    let dashboard = Dashboard::build(&posts, words, config.sample_rows);
    let report = render_report(&dashboard, input, Utc::now())?;
    print!("{report}");
    Ok(())
}

pub(crate) fn render_report(
    dashboard: &Dashboard,
    source: &Path,
    generated_at: DateTime<Utc>,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let metrics = &dashboard.metrics;

    writeln!(out, "# Social Media Sentiment Report")?;
    writeln!(out)?;
    writeln!(out, "**Generated**: {}", generated_at.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out, "**Source**: {}", source.display())?;
    writeln!(out, "**Posts**: {}", metrics.total_posts)?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;

    writeln!(out, "## Key Metrics")?;
    writeln!(out)?;
    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|--------|-------|")?;
    writeln!(out, "| Average Sentiment Score | {:.3} |", metrics.average_score)?;
    writeln!(out, "| Positive Posts | {:.1}% |", metrics.positive_pct)?;
    writeln!(out, "| Negative Posts | {:.1}% |", metrics.negative_pct)?;
    writeln!(out, "| Neutral Posts | {:.1}% |", metrics.neutral_pct)?;
    writeln!(out)?;

    writeln!(out, "## Daily Average Sentiment")?;
    writeln!(out)?;
    writeln!(out, "| Date | Average Score | Posts |")?;
    writeln!(out, "|------|---------------|-------|")?;
    for day in &dashboard.trend {
        writeln!(
            out,
            "| {} | {:.4} | {} |",
            day.day, day.mean_score, day.post_count
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Sentiment Distribution")?;
    writeln!(out)?;
    writeln!(out, "| Sentiment | Posts |")?;
    writeln!(out, "|-----------|-------|")?;
    for count in &dashboard.distribution {
        writeln!(out, "| {} | {} |", count.label, count.count)?;
    }
    writeln!(out)?;

    write_word_section(&mut out, "Positive", &dashboard.positive_words)?;
    write_word_section(&mut out, "Negative", &dashboard.negative_words)?;

    writeln!(out, "## Data Sample")?;
    writeln!(out)?;
    writeln!(out, "| Date | Text | Score | Label |")?;
    writeln!(out, "|------|------|-------|-------|")?;
    for post in &dashboard.sample {
        writeln!(
            out,
            "| {} | {} | {:.4} | {} |",
            format_post_date(post.date()),
            table_cell(post.text().unwrap_or_default()),
            post.score(),
            post.label()
        )?;
    }

    Ok(out)
}

fn write_word_section(
    out: &mut String,
    heading: &str,
    words: &WordFrequencies,
) -> std::fmt::Result {
    writeln!(out, "## Most Common Words in {heading} Posts")?;
    writeln!(out)?;
    match words {
        WordFrequencies::Empty { message } => writeln!(out, "_{message}_")?,
        WordFrequencies::Words { words } => {
            writeln!(out, "| Word | Count |")?;
            writeln!(out, "|------|-------|")?;
            for word in words {
                writeln!(out, "| {} | {} |", word.word, word.count)?;
            }
        }
    }
    writeln!(out)
}

/// Flatten text onto one line, escape pipes, and truncate for a table cell.
fn table_cell(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut cell: String = flat.chars().take(SAMPLE_TEXT_WIDTH).collect();
    if flat.chars().count() > SAMPLE_TEXT_WIDTH {
        cell.push('…');
    }
    cell.replace('|', "\\|")
}
