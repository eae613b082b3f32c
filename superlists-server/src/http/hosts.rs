//! Allowed-hosts check
//!
//! When the server is configured with host names, requests carrying any
//! other `Host` header are refused before they reach a handler.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::state::AppState;

/// Middleware rejecting requests for hosts we don't serve.
pub async fn check_allowed_host(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let allowed = &state.config().allowed_hosts;
    if allowed.is_empty() {
        return next.run(req).await;
    }

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if is_allowed(host, allowed) {
        next.run(req).await
    } else {
        tracing::warn!(host, "Rejected request for disallowed host");
        ApiError::DisallowedHost {
            host: host.to_owned(),
        }
        .into_response()
    }
}

/// Match a `Host` header value against the allowed patterns.
///
/// Patterns are exact names, `*` for anything, or `.example.com` for the
/// domain and all its subdomains. Ports are ignored, case is ignored.
pub fn is_allowed(host: &str, allowed: &[String]) -> bool {
    let name = strip_port(host).to_ascii_lowercase();
    if name.is_empty() {
        return false;
    }

    allowed.iter().any(|pattern| {
        let pattern = pattern.to_ascii_lowercase();
        if pattern == "*" {
            true
        } else if let Some(domain) = pattern.strip_prefix('.') {
            name == domain || name.ends_with(&pattern)
        } else {
            name == pattern
        }
    })
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 literal, keep the brackets
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}
