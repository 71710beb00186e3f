// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server

pub mod entries;
pub mod parse;
pub mod stats;
pub mod summary;

use crate::error::{EntryError, Error, ResolveError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

/// Error response: `{"error": "<message>"}` with a status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Run registry work on the blocking pool
///
/// Registry calls take a blocking lock and a summary may walk a large graph,
/// neither of which belongs on an async worker.
pub(crate) async fn run_blocking<T, F>(task: F) -> ApiResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        tracing::error!("Registry task failed: {}", e);
        ApiError::internal("Internal server error")
    })
}

/// Validation and resolution failures are all client errors
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<EntryError> for ApiError {
    fn from(err: EntryError) -> Self {
        Error::from(err).into()
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        Error::from(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
