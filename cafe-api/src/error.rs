//! Unified error type for cafe-api
//!
//! Every failure a handler can produce is an `ApiError`; the `IntoResponse`
//! impl turns it into the JSON error envelope at the API boundary, so service
//! functions can rely on plain `?` propagation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message for a lookup by id that matched nothing
pub const NOT_FOUND_ID: &str = "Sorry, a cafe with that id was not found in the database.";
/// Message for a location search that matched nothing
pub const NOT_FOUND_LOCATION: &str = "Sorry, we don't have a cafe at that location.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// No record matched the given id or search key
    #[error("{0}")]
    NotFound(&'static str),
    /// Supplied api-key does not match the configured secret
    #[error("api-key mismatch")]
    Forbidden,
    /// Insert rejected by the unique constraint on `name`
    #[error("cafe name already exists")]
    DuplicateName,
    /// Random pick attempted on an empty table
    #[error("no cafes in the database")]
    EmptyCollection,
    /// Database or pool failure (logged, collapsed to a 500)
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "Not Found": message } }),
            ),
            ApiError::EmptyCollection => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "Not Found": "Sorry, there are no cafes in the database." } }),
            ),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({ "error": "Sorry, that's not allowed. Make sure you have the correct api-key." }),
            ),
            ApiError::DuplicateName => (
                StatusCode::CONFLICT,
                json!({ "error": "Sorry, a cafe with that name is already in the database." }),
            ),
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
