// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use cookbook::server::{create_router, ServerConfig, ServerState};
use cookbook::Registry;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a registry with a small burger menu.
///
/// ```text
/// Combo Meal -> Beef Burger x1, Fries x2, Cola x1
/// Beef Burger -> Bun x2, Patty x1, Lettuce x3
/// Fries -> Potato x2, Salt x1
/// ```
pub fn burger_registry() -> Registry {
    let registry = Registry::new();
    registry.add_ingredient("Bun", 2).unwrap();
    registry.add_ingredient("Patty", 8).unwrap();
    registry.add_ingredient("Lettuce", 1).unwrap();
    registry.add_ingredient("Potato", 5).unwrap();
    registry.add_ingredient("Salt", 0).unwrap();
    registry.add_ingredient("Cola", 0).unwrap();
    registry
        .add_recipe("Beef Burger", [("Bun", 2), ("Patty", 1), ("Lettuce", 3)])
        .unwrap();
    registry.add_recipe("Fries", [("Potato", 2), ("Salt", 1)]).unwrap();
    registry
        .add_recipe("Combo Meal", [("Beef Burger", 1), ("Fries", 2), ("Cola", 1)])
        .unwrap();
    registry
}

/// Router over a fresh, empty registry with request tracing off.
pub fn test_app() -> Router {
    let config = ServerConfig {
        enable_audit_log: false,
        ..ServerConfig::default()
    };
    create_router(Arc::new(ServerState::new(config)))
}

/// Send one request and return the status and raw body text.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// POST a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// GET a path.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Parse a body as JSON.
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}
