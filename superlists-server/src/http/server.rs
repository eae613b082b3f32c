//! Axum server setup
//!
//! Server skeleton with:
//! - Allowed-hosts middleware
//! - Static files under /static
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::hosts::check_allowed_host;
use super::routes;
use crate::db::{DbError, ListStore};
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// Host names accepted in the `Host` header.
    ///
    /// Empty means every host is accepted, which is only sensible
    /// for local development.
    pub allowed_hosts: Vec<String>,

    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_hosts: Vec::new(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config().static_dir);

    Router::new()
        .merge(routes::home::router())
        .merge(routes::lists::router())
        .merge(routes::health::router())
        .nest_service("/static", static_files)
        .fallback(routes::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            check_allowed_host,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// Applies the schema first, then serves until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let store = connect(&database_url, DEFAULT_MAX_CONNECTIONS).await?;
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(store: Arc<dyn ListStore>, config: ServerConfig) -> Result<(), ServerError> {
    store.migrate().await?;

    if config.allowed_hosts.is_empty() {
        tracing::warn!("No allowed hosts configured - accepting any Host header");
    } else {
        tracing::info!(hosts = ?config.allowed_hosts, "Allowed hosts");
    }

    let bind_addr = config.bind_addr;
    let app = build_router(AppState::new(store, config));

    // Bind listener
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),
}
