//! Page templates
//!
//! Views only iterate over what they are given. Item positions come
//! from the loop counter, nothing positional is stored.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::error::ApiError;
use crate::models::{Item, TodoList, ValidationError};

/// Form target on the home page.
pub const NEW_LIST_ACTION: &str = "/lists/new";

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub form_action: String,
    pub error: Option<String>,
}

impl HomeTemplate {
    pub fn new() -> Self {
        Self {
            form_action: NEW_LIST_ACTION.to_owned(),
            error: None,
        }
    }

    pub fn with_error(err: &ValidationError) -> Self {
        Self {
            error: Some(err.user_message().to_owned()),
            ..Self::new()
        }
    }
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub form_action: String,
    pub items: Vec<Item>,
    pub error: Option<String>,
}

impl ListTemplate {
    pub fn new(list: &TodoList, items: Vec<Item>) -> Self {
        Self {
            form_action: format!("{}add_item", list.url()),
            items,
            error: None,
        }
    }

    pub fn with_error(mut self, err: &ValidationError) -> Self {
        self.error = Some(err.user_message().to_owned());
        self
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}

/// Render a template as a 200 HTML response.
pub fn render<T: Template>(template: &T) -> Result<Response, ApiError> {
    render_with_status(StatusCode::OK, template)
}

/// Render a template with an explicit status code.
pub fn render_with_status<T: Template>(
    status: StatusCode,
    template: &T,
) -> Result<Response, ApiError> {
    let html = template.render()?;
    Ok((status, Html(html)).into_response())
}
