//! API error types with IntoResponse
//!
//! Errors are converted to HTML error pages with appropriate status codes.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::templates::ErrorTemplate;
use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Host header not in the allowed list (400)
    DisallowedHost { host: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Template failed to render (500, logged)
    Template(askama::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DisallowedHost { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::DisallowedHost { host } => format!("invalid host header '{}'", host),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                "an internal error occurred".to_owned()
            }
            Self::Template(e) => {
                tracing::error!("Template error: {}", e);
                "an internal error occurred".to_owned()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = ErrorTemplate {
            status: status.as_u16(),
            message: self.public_message(),
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Template error: {}", e);
                (status, page.message).into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        Self::Template(e)
    }
}
