//! Home page

use axum::{response::Response, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::templates::{render, HomeTemplate};
use crate::state::AppState;

/// GET / - empty new-item form, no storage access
async fn home_page() -> Result<Response, ApiError> {
    render(&HomeTemplate::new())
}

/// Home routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home_page))
}
