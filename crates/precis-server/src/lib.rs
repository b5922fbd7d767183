//! Precis Server
//!
//! Web front end for the summarization engine: an HTML form interface for
//! text, URLs and PDF uploads, plus a JSON API.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod render;

use config::ServerConfig;
use handlers::{create_router, AppState};
use precis_acquire::{FetchError, WebFetcher};
use precis_engine::{ResourceError, Summarizer};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Linguistic resources could not be loaded
    #[error("Failed to load linguistic resources: {0}")]
    Resources(#[from] ResourceError),

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] FetchError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the shared state from configuration.
///
/// Loads the linguistic resources once; failure here is fatal for the process.
pub fn build_state(config: ServerConfig) -> Result<AppState, ServerError> {
    config.validate()?;

    let summarizer = Summarizer::from_config(&config.engine)?;
    let fetcher = WebFetcher::with_timeout(config.fetch_timeout())?;

    Ok(AppState {
        summarizer: Arc::new(summarizer),
        fetcher,
        config: Arc::new(config),
    })
}

/// Start the HTTP server
///
/// Initializes logging, loads resources and serves until the process exits.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    info!("Starting Precis server");
    info!("Bind address: {}", config.bind_addr());
    info!("Language: {}", config.engine.language);
    info!("Default ratio: {}", config.engine.default_ratio);

    let bind_addr = config.bind_addr();
    let state = build_state(config)?;
    info!(
        stopwords = state.summarizer.resources().stopwords().len(),
        "Linguistic resources loaded"
    );

    let app = create_router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state() {
        let state = build_state(ServerConfig::default_test_config()).unwrap();
        assert_eq!(state.summarizer.resources().language(), "en");
        assert_eq!(state.summarizer.defaults().ratio, 0.3);
    }

    #[test]
    fn test_unknown_language_is_fatal() {
        let mut config = ServerConfig::default_test_config();
        config.engine.language = "tlh".to_string();
        assert!(matches!(
            build_state(config),
            Err(ServerError::Resources(ResourceError::UnsupportedLanguage(_)))
        ));
    }
}
