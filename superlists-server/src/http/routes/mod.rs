//! Route handlers organized by page

pub mod health;
pub mod home;
pub mod lists;

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use super::error::ApiError;

/// `302 Found` pointing at `location`.
pub(crate) fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

/// Fallback for paths no route matches.
pub(crate) async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "page",
        id: uri.path().to_owned(),
    }
}
