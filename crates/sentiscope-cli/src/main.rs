mod annotate;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sentiscope_sentiment::SentimentError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sentiscope-cli")]
#[command(about = "Social media sentiment annotation and reporting")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize and score every row of a raw post table
    Annotate {
        /// Raw CSV table with `date` and `text` columns
        #[arg(long)]
        input: PathBuf,

        /// Destination for the annotated table (defaults to `SENTISCOPE_DATA_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Score a single piece of text
    Score {
        text: String,

        /// Score the text as given, skipping normalization
        #[arg(long)]
        raw: bool,
    },
    /// Print a markdown dashboard report for an annotated table
    Report {
        /// Annotated CSV table (defaults to `SENTISCOPE_DATA_PATH`)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Words listed per sentiment category
        #[arg(long, default_value_t = 20)]
        words: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let config = sentiscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Annotate { input, output }) => {
            let output = output.unwrap_or_else(|| config.data_path.clone());
            annotate::run_annotate(&config, &input, &output)?;
        }
        Some(Commands::Score { text, raw }) => annotate::run_score(&config, &text, raw)?,
        Some(Commands::Report { input, words }) => {
            let input = input.unwrap_or_else(|| config.data_path.clone());
            report::run_report(&config, &input, words)?;
        }
        None => println!("sentiscope-cli ready; see --help for commands"),
    }

    Ok(())
}

/// Turn a table loading failure into the message shown to the user.
pub(crate) fn dataset_error(err: SentimentError) -> anyhow::Error {
    match err {
        SentimentError::MissingInput(path) => anyhow::anyhow!(
            "could not load the dataset: {} does not exist (ensure the file exists)",
            path.display()
        ),
        other => anyhow::Error::new(other).context("could not load the dataset"),
    }
}
