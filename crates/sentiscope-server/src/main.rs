mod api;
mod middleware;

use sentiscope_sentiment::SentimentError;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = sentiscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let posts = match sentiscope_sentiment::load_annotated(&config.data_path) {
        Ok(posts) => posts,
        Err(SentimentError::MissingInput(path)) => {
            tracing::error!(path = %path.display(), "annotated table not found");
            anyhow::bail!(
                "could not load the dataset: {} does not exist (ensure the file exists)",
                path.display()
            );
        }
        Err(e) => return Err(e.into()),
    };

    let state = AppState::new(posts, config.word_limit, config.sample_rows);
    tracing::info!(
        env = %config.env,
        posts = state.posts.len(),
        days = state.dashboard.trend.len(),
        "dashboard ready"
    );
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("dashboard server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM, logging which one arrived.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for ctrl-c; waiting for SIGTERM only");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "ctrl-c",
        () = terminate => "sigterm",
    };

    tracing::info!(signal, "shutting down dashboard server; in-flight requests will finish");
}
