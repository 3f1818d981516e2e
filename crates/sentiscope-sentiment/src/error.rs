use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("input table not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unparseable date {value:?}")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: score {value} is not a number in [-1, 1]")]
    InvalidScore { row: usize, value: f64 },

    #[error("lexicon line {line}: {reason}")]
    Lexicon { line: usize, reason: String },
}
