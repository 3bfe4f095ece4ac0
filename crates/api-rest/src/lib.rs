//! # API REST
//!
//! REST API implementation for the article service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - Request body decoding and error envelopes
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (panic recovery, tracing, CORS)
//!
//! Uses `article-core` for all data operations and `api-shared` for common types.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

use api_shared::HealthService;
use article_core::{ArticleStore, CoreConfig};
use std::net::SocketAddr;
use std::sync::Arc;

pub use error::ApiError;
pub use routes::router;

/// Application state shared across REST API handlers
///
/// Holds the startup configuration and the one article store the process owns. Both are
/// injected by the caller; there is no process-wide store.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
    pub store: Arc<ArticleStore>,
    pub health: HealthService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<ArticleStore>) -> Self {
        let health = HealthService::new(cfg.environment().as_str(), env!("CARGO_PKG_VERSION"));
        Self { cfg, store, health }
    }
}

/// Serves the REST API on `0.0.0.0:<port>` until Ctrl-C is received.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(cfg: Arc<CoreConfig>, store: Arc<ArticleStore>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port()));
    let environment = cfg.environment();
    let app = router(AppState::new(cfg, store));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, env = %environment, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(%addr, "stopped server");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down server"),
        Err(e) => tracing::error!("failed to listen for shutdown signal: {}", e),
    }
}
