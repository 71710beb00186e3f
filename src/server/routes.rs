// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{entries, parse, stats, summary};
use crate::server::SharedState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);
    let audit = state.config.enable_audit_log;

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Registry writes and lookups
        .route("/entry", post(entries::create_entry))
        .route("/entry/:name", get(entries::get_entry))
        // Recipe summaries
        .route("/summary", get(summary::get_summary))
        // Name normalization
        .route("/parse", post(parse::parse_name))
        // Counters
        .route("/stats", get(stats::get_stats))
        .with_state(state)
        .layer(cors);

    if audit {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Permissive when no origins are configured, otherwise an explicit list
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        // Entries were checked when the config was validated
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
