// src/server/config.rs
//! Configuration file parsing for the cookbook server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, request audit logging
//! - [resolver] - Recipe expansion limits
//! - [security] - CORS

use crate::resolver::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
use crate::server::ServerConfig;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Security settings
    #[serde(default)]
    pub security: SecuritySection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// API bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Log every request/response pair
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            audit_log: true,
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Resolver configuration section
#[derive(Debug, Deserialize)]
pub struct ResolverSection {
    /// Deepest recipe nesting a summary may walk
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Security configuration section
#[derive(Debug, Default, Deserialize)]
pub struct SecuritySection {
    /// CORS allowed origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CookbookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        if self.resolver.max_depth == 0 {
            anyhow::bail!("resolver.max_depth must be at least 1");
        }
        if self.resolver.max_depth > MAX_DEPTH_CEILING {
            anyhow::bail!(
                "resolver.max_depth must be at most {}, got {}",
                MAX_DEPTH_CEILING,
                self.resolver.max_depth
            );
        }

        for origin in &self.security.cors_origins {
            if origin == "*" {
                anyhow::bail!("security.cors_origins: leave the list empty to allow any origin");
            }
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid security.cors_origins entry: {}", origin))?;
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        Ok(ServerConfig {
            bind_addr,
            max_depth: self.resolver.max_depth,
            enable_audit_log: self.server.audit_log,
            cors_allowed_origins: self.security.cors_origins.clone(),
        })
    }
}
