//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ListId;

/// Extract a list id from the path.
///
/// Anything that isn't a number can't name a list, so it is a 404
/// rather than a validation error.
pub struct ValidListId(pub ListId);

impl<S> FromRequestParts<S> for ValidListId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "list",
                id: String::new(),
            })?;

        let id = raw.parse::<ListId>().map_err(|_| ApiError::NotFound {
            resource: "list",
            id: raw.clone(),
        })?;

        Ok(Self(id))
    }
}
