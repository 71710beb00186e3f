// src/server/handlers/stats.rs
//! Server statistics

use crate::server::{MetricsSnapshot, SharedState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Registered entries
    pub entries: usize,
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
}

/// GET /stats
pub async fn get_stats(State(state): State<SharedState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        entries: state.registry.len(),
        metrics: state.metrics.snapshot(),
    })
}
