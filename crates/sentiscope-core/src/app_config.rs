use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Annotated table consumed by `report` and the dashboard server.
    pub data_path: PathBuf,
    /// Optional VADER-format lexicon replacing the built-in one.
    pub lexicon_path: Option<PathBuf>,
    /// Maximum words listed per sentiment category.
    pub word_limit: usize,
    pub sample_rows: usize,
}
