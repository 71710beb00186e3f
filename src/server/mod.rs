// src/server/mod.rs
//! Cookbook HTTP server
//!
//! This module provides an HTTP server that:
//! - Accepts ingredient and recipe definitions (`POST /entry`)
//! - Summarizes nested recipes into ingredient totals (`GET /summary`)
//! - Normalizes handwritten recipe names (`POST /parse`)
//!
//! The registry is built once at startup and shared by every handler
//! through [`ServerState`]; nothing is persisted across restarts.

pub mod config;
mod handlers;
pub mod metrics;
mod routes;

pub use config::CookbookConfig;
pub use handlers::ApiError;
pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;

use crate::cookbook::Registry;
use crate::resolver::DEFAULT_MAX_DEPTH;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Maximum recipe nesting depth for summaries
    pub max_depth: usize,
    /// Enable per-request trace logging
    pub enable_audit_log: bool,
    /// CORS allowed origins (empty = any origin)
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_depth: DEFAULT_MAX_DEPTH,
            enable_audit_log: true,
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    /// The one registry for the lifetime of the process
    pub registry: Registry,
    /// Metrics collector
    pub metrics: Arc<ServerMetrics>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        let registry = Registry::with_max_depth(config.max_depth);
        let metrics = Arc::new(ServerMetrics::new());

        Self {
            config,
            registry,
            metrics,
        }
    }
}

/// Shared state handle passed to every handler
pub type SharedState = Arc<ServerState>;

/// Start the cookbook server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);
    tracing::info!("Maximum recipe depth: {}", config.max_depth);
    if config.enable_audit_log {
        tracing::info!("Request audit logging: enabled");
    }

    let state = Arc::new(ServerState::new(config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
