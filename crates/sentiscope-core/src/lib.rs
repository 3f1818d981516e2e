//! Shared data model and configuration for sentiscope.

pub mod app_config;
pub mod config;
pub mod label;
pub mod post;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use label::{SentimentLabel, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use post::{AnnotatedPost, RawPost};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
