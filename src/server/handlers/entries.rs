// src/server/handlers/entries.rs
//! Registry write and lookup handlers

use super::{run_blocking, ApiError, ApiResult};
use crate::cookbook::{Entry, EntryRequest};
use crate::server::SharedState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

/// Register an ingredient or recipe
///
/// POST /entry
pub async fn create_entry(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let body = match payload {
        Ok(Json(body)) if body.as_object().is_some_and(|fields| !fields.is_empty()) => body,
        Ok(_) => return Err(invalid_body(&state, "empty or non-object body")),
        Err(rejection) => return Err(invalid_body(&state, &rejection.to_string())),
    };
    let request: EntryRequest =
        serde_json::from_value(body).map_err(|e| invalid_body(&state, &e.to_string()))?;

    let task_state = state.clone();
    match run_blocking(move || task_state.registry.create_entry(request)).await? {
        Ok(_) => {
            state.metrics.record_entry_created();
            Ok(Json(json!({})))
        }
        Err(e) => {
            warn!("Rejected entry: {}", e);
            state.metrics.record_entry_rejected();
            Err(e.into())
        }
    }
}

fn invalid_body(state: &SharedState, reason: &str) -> ApiError {
    warn!("Rejected entry body: {}", reason);
    state.metrics.record_entry_rejected();
    ApiError::bad_request("Request body is invalid")
}

/// Fetch a single entry as registered
///
/// GET /entry/:name
pub async fn get_entry(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Entry>> {
    state
        .registry
        .lookup(&name)
        .map(Json)
        .map_err(|_| ApiError::not_found("Entry not found"))
}
