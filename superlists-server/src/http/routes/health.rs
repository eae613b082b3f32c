//! Liveness check for load balancers and deploy scripts
//!
//! Answers 200 only when the list store answers a query, so a server
//! that lost its database drops out of rotation.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let (status, database) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed: database unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    let report = HealthReport {
        status: if status.is_success() { "ok" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    };
    (status, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
