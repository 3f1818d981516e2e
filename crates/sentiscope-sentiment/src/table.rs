//! Flat CSV input/output for raw and annotated post tables.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use sentiscope_core::post::{format_post_date, parse_post_date};
use sentiscope_core::{AnnotatedPost, RawPost, SentimentLabel};
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnnotatedRecord {
    date: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    processed_text: Option<String>,
    #[serde(alias = "vader_score")]
    score: f64,
    #[serde(default, alias = "vader_label")]
    label: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRecord<'a> {
    date: String,
    text: &'a str,
    processed_text: &'a str,
    score: f64,
    label: SentimentLabel,
}

fn open_input(path: &Path) -> Result<File, SentimentError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SentimentError::MissingInput(path.to_path_buf()),
        _ => SentimentError::Io(e),
    })
}

/// Rows shorter than the header are accepted; absent trailing cells
/// deserialize as missing.
fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().flexible(true).from_reader(reader)
}

fn check_score(row: usize, score: f64) -> Result<f64, SentimentError> {
    if (-1.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(SentimentError::InvalidScore { row, value: score })
    }
}

fn parse_date(row: usize, raw: &str) -> Result<chrono::NaiveDateTime, SentimentError> {
    parse_post_date(raw).ok_or_else(|| SentimentError::InvalidDate {
        row,
        value: raw.to_string(),
    })
}

/// Read a raw post table with at least a `date` column.
///
/// A missing `text` column, an empty cell, or a row that stops before the
/// `text` cell yields `text: None`.
///
/// # Errors
///
/// Returns [`SentimentError::MissingInput`] if the file does not exist,
/// [`SentimentError::InvalidDate`] for an unparseable date (row numbers are
/// 1-based, header excluded), or [`SentimentError::Csv`] for malformed CSV.
pub fn read_raw_posts(path: &Path) -> Result<Vec<RawPost>, SentimentError> {
    let posts = read_raw_posts_from(open_input(path)?)?;
    tracing::info!(path = %path.display(), rows = posts.len(), "loaded raw post table");
    Ok(posts)
}

/// Reader-based variant of [`read_raw_posts`].
///
/// # Errors
///
/// Same as [`read_raw_posts`], minus `MissingInput`.
pub fn read_raw_posts_from<R: Read>(reader: R) -> Result<Vec<RawPost>, SentimentError> {
    let mut csv = csv_reader(reader);
    let mut posts = Vec::new();
    for (idx, record) in csv.deserialize::<RawRecord>().enumerate() {
        let record = record?;
        let date = parse_date(idx + 1, &record.date)?;
        posts.push(RawPost::new(date, record.text));
    }
    Ok(posts)
}

/// Read an annotated table written by [`write_annotated_posts`].
///
/// Also accepts the `vader_score` / `vader_label` column names. The label is
/// always re-derived from the score; a stored label that disagrees is logged.
///
/// # Errors
///
/// Same as [`read_raw_posts`]; a row without a numeric score is a CSV error,
/// and a score that is NaN or outside `[-1, 1]` is
/// [`SentimentError::InvalidScore`].
pub fn read_annotated_posts(path: &Path) -> Result<Vec<AnnotatedPost>, SentimentError> {
    let posts = read_annotated_posts_from(open_input(path)?)?;
    tracing::info!(path = %path.display(), rows = posts.len(), "loaded annotated post table");
    Ok(posts)
}

/// Reader-based variant of [`read_annotated_posts`].
///
/// # Errors
///
/// Same as [`read_annotated_posts`], minus `MissingInput`.
pub fn read_annotated_posts_from<R: Read>(
    reader: R,
) -> Result<Vec<AnnotatedPost>, SentimentError> {
    let mut csv = csv_reader(reader);
    let mut posts = Vec::new();
    for (idx, record) in csv.deserialize::<AnnotatedRecord>().enumerate() {
        let record = record?;
        let row = idx + 1;
        let date = parse_date(row, &record.date)?;
        let score = check_score(row, record.score)?;
        let post = AnnotatedPost::new(
            RawPost::new(date, record.text),
            record.processed_text.unwrap_or_default(),
            score,
        );

        if let Some(stored) = record.label.as_deref() {
            match stored.parse::<SentimentLabel>() {
                Ok(label) if label == post.label() => {}
                Ok(label) => tracing::warn!(
                    row,
                    stored = %label,
                    derived = %post.label(),
                    score = post.score(),
                    "stored label disagrees with score; using derived label"
                ),
                Err(e) => tracing::warn!(row, error = %e, "ignoring unreadable stored label"),
            }
        }

        posts.push(post);
    }
    Ok(posts)
}

/// Write an annotated table, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SentimentError::Io`] or [`SentimentError::Csv`] if the file
/// cannot be written.
pub fn write_annotated_posts(path: &Path, posts: &[AnnotatedPost]) -> Result<(), SentimentError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_annotated_posts_to(file, posts)?;
    tracing::info!(path = %path.display(), rows = posts.len(), "wrote annotated post table");
    Ok(())
}

/// Writer-based variant of [`write_annotated_posts`].
///
/// # Errors
///
/// Returns [`SentimentError::Csv`] or [`SentimentError::Io`] on write failure.
pub fn write_annotated_posts_to<W: Write>(
    writer: W,
    posts: &[AnnotatedPost],
) -> Result<(), SentimentError> {
    let mut csv = csv::Writer::from_writer(writer);
    for post in posts {
        csv.serialize(OutputRecord {
            date: format_post_date(post.date()),
            text: post.text().unwrap_or_default(),
            processed_text: post.processed_text(),
            score: post.score(),
            label: post.label(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_raw_rows_with_missing_text() {
        let data = "date,text,user\n\
                    2024-01-01,I love this,alice\n\
                    2024-01-02,,bob\n";
        let posts = read_raw_posts_from(Cursor::new(data)).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text.as_deref(), Some("I love this"));
        assert_eq!(posts[1].text, None);
    }

    #[test]
    fn absent_text_column_means_no_text() {
        let data = "date\n2024-01-01\n";
        let posts = read_raw_posts_from(Cursor::new(data)).unwrap();
        assert_eq!(posts[0].text, None);
    }

    #[test]
    fn quoted_text_with_commas_and_newlines_survives() {
        let data = "date,text\n2024-01-01,\"Hello, world\nsecond line\"\n";
        let posts = read_raw_posts_from(Cursor::new(data)).unwrap();
        assert_eq!(posts[0].text.as_deref(), Some("Hello, world\nsecond line"));
    }

    #[test]
    fn invalid_date_fails_whole_table() {
        let data = "date,text\n2024-01-01,ok\nnot-a-date,bad\n";
        let err = read_raw_posts_from(Cursor::new(data)).unwrap_err();
        assert!(
            matches!(err, SentimentError::InvalidDate { row: 2, ref value } if value == "not-a-date"),
            "expected InvalidDate on row 2, got: {err:?}"
        );
    }

    #[test]
    fn short_row_recovers_as_missing_text() {
        let data = "date,text\n2024-01-01,good\n2024-01-02\n2024-01-03,bad\n";
        let posts = read_raw_posts_from(Cursor::new(data)).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].text.as_deref(), Some("good"));
        assert_eq!(posts[1].text, None);
        assert_eq!(posts[2].text.as_deref(), Some("bad"));
    }

    #[test]
    fn annotated_row_without_label_cell_still_reads() {
        let data = "date,text,processed_text,score,label\n\
                    2024-01-01,Great!,great,0.6249\n";
        let posts = read_annotated_posts_from(Cursor::new(data)).unwrap();
        assert_eq!(posts[0].label(), SentimentLabel::Positive);
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let data = "date,text,processed_text,score,label\n\
                    2024-01-01,ok,ok,0.5,Positive\n\
                    2024-01-02,huge,huge,5.0,Positive\n";
        let err = read_annotated_posts_from(Cursor::new(data)).unwrap_err();
        assert!(
            matches!(err, SentimentError::InvalidScore { row: 2, value } if value == 5.0),
            "expected InvalidScore on row 2, got: {err:?}"
        );
    }

    #[test]
    fn nan_score_is_rejected() {
        let data = "date,text,processed_text,score,label\n\
                    2024-01-01,odd,odd,NaN,Neutral\n";
        let err = read_annotated_posts_from(Cursor::new(data)).unwrap_err();
        assert!(
            matches!(err, SentimentError::InvalidScore { row: 1, value } if value.is_nan()),
            "expected InvalidScore on row 1, got: {err:?}"
        );
    }

    #[test]
    fn boundary_scores_are_accepted() {
        let data = "date,text,processed_text,score\n\
                    2024-01-01,a,a,-1.0\n\
                    2024-01-02,b,b,1\n";
        let posts = read_annotated_posts_from(Cursor::new(data)).unwrap();
        assert_eq!(posts[0].label(), SentimentLabel::Negative);
        assert_eq!(posts[1].label(), SentimentLabel::Positive);
    }

    #[test]
    fn missing_file_is_missing_input() {
        let err = read_raw_posts(Path::new("/nonexistent/raw.csv")).unwrap_err();
        assert!(matches!(err, SentimentError::MissingInput(_)));
        let err = read_annotated_posts(Path::new("/nonexistent/processed.csv")).unwrap_err();
        assert!(matches!(err, SentimentError::MissingInput(_)));
    }

    #[test]
    fn reads_legacy_vader_columns_and_rederives_label() {
        let data = "date,text,processed_text,vader_score,vader_label\n\
                    2024-01-01,Great!,great,0.6249,Positive\n\
                    2024-01-02,meh,meh,-0.3,Neutral\n\
                    2024-01-03,,,0.0,\n";
        let posts = read_annotated_posts_from(Cursor::new(data)).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].label(), SentimentLabel::Positive);
        assert_eq!(posts[1].label(), SentimentLabel::Negative);
        assert_eq!(posts[2].processed_text(), "");
        assert_eq!(posts[2].text(), None);
        assert_eq!(posts[2].label(), SentimentLabel::Neutral);
    }

    #[test]
    fn written_table_reads_back() {
        let raw = read_raw_posts_from(Cursor::new(
            "date,text\n2024-01-01 08:15:00,\"Sunny, warm\"\n2024-01-02,\n",
        ))
        .unwrap();
        let posts: Vec<AnnotatedPost> = raw
            .into_iter()
            .map(|r| {
                let processed = r.text.clone().unwrap_or_default().to_lowercase();
                AnnotatedPost::new(r, processed, 0.42)
            })
            .collect();

        let mut buf = Vec::new();
        write_annotated_posts_to(&mut buf, &posts).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("date,text,processed_text,score,label\n"));
        assert!(text.contains("2024-01-01 08:15:00,\"Sunny, warm\",\"sunny, warm\",0.42,Positive"));

        let back = read_annotated_posts_from(Cursor::new(buf)).unwrap();
        assert_eq!(back, posts);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed").join("out.csv");
        write_annotated_posts(&path, &[]).unwrap();
        assert!(path.exists());
        assert!(read_annotated_posts(&path).unwrap().is_empty());
    }
}
