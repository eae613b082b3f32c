//! List endpoints
//!
//! - POST /lists/new            - start a list with its first item
//! - GET  /lists/{id}/          - show a list
//! - GET  /lists/{id}           - 301 to the trailing-slash URL
//! - POST /lists/{id}/add_item  - append an item

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use super::redirect_found;
use crate::http::error::ApiError;
use crate::http::extractors::ValidListId;
use crate::http::templates::{render, render_with_status, HomeTemplate, ListTemplate};
use crate::models::ItemText;
use crate::state::AppState;

/// New item form. A missing field reads as empty text.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub item_text: String,
}

/// POST /lists/new - create a list and its first item
async fn new_list(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, ApiError> {
    let text = match ItemText::new(&form.item_text) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected new list");
            return render_with_status(StatusCode::BAD_REQUEST, &HomeTemplate::with_error(&e));
        }
    };

    let (list, item) = state.store().create_list_with_item(&text).await?;
    tracing::info!(list_id = %list.id, item_id = item.id, "Created list");

    Ok(redirect_found(&list.url()))
}

/// GET /lists/{id}/ - render a list with its items in creation order
async fn view_list(
    State(state): State<AppState>,
    ValidListId(list_id): ValidListId,
) -> Result<Response, ApiError> {
    let list = state.store().get_list(list_id).await?;
    let items = state.store().list_items(list.id).await?;

    render(&ListTemplate::new(&list, items))
}

/// POST /lists/{id}/add_item - append an item to an existing list
async fn add_item(
    State(state): State<AppState>,
    ValidListId(list_id): ValidListId,
    Form(form): Form<ItemForm>,
) -> Result<Response, ApiError> {
    let text = match ItemText::new(&form.item_text) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(list_id = %list_id, error = %e, "Rejected item");
            let list = state.store().get_list(list_id).await?;
            let items = state.store().list_items(list.id).await?;
            let page = ListTemplate::new(&list, items).with_error(&e);
            return render_with_status(StatusCode::BAD_REQUEST, &page);
        }
    };

    // create_item reports a missing list as NotFound
    let item = state.store().create_item(list_id, &text).await?;
    tracing::info!(list_id = %list_id, item_id = item.id, "Added item");

    Ok(redirect_found(&list_id.url()))
}

/// GET /lists/{id} - redirect to the canonical trailing-slash URL
async fn append_slash(ValidListId(list_id): ValidListId) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, list_id.url())],
    )
        .into_response()
}

/// List routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lists/new", post(new_list))
        .route("/lists/{id}", get(append_slash))
        .route("/lists/{id}/", get(view_list))
        .route("/lists/{id}/add_item", post(add_item))
}
