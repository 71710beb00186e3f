// src/server/handlers/summary.rs
//! Recipe summary handler

use super::{run_blocking, ApiResult};
use crate::error::ResolveError;
use crate::resolver::Summary;
use crate::server::SharedState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Flatten a recipe into base-ingredient totals and total cook time
///
/// GET /summary?name=<recipe>
pub async fn get_summary(
    State(state): State<SharedState>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<Summary>> {
    let name = query.name.unwrap_or_default();

    let result = if name.is_empty() {
        Err(ResolveError::NotFound(name))
    } else {
        let task_state = state.clone();
        run_blocking(move || task_state.registry.summarize(&name)).await?
    };

    match result {
        Ok(summary) => {
            info!(
                "Summarized '{}': {} ingredients, cook time {}",
                summary.name,
                summary.ingredients.len(),
                summary.cook_time
            );
            state.metrics.record_summary();
            Ok(Json(summary))
        }
        Err(e) => {
            warn!("Summary failed: {}", e);
            state.metrics.record_summary_failure();
            Err(e.into())
        }
    }
}
