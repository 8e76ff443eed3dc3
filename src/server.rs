// ABOUTME: Server composition root wiring the workout store, config, and HTTP routes together
// ABOUTME: Owns shared resources and runs the axum listener with CORS and request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server composition root
//!
//! [`ServerResources`] holds everything request handlers share: the workout
//! store and the loaded configuration. The store is an explicitly
//! constructed instance injected through axum `State`, so tests can build
//! isolated servers around throwaway stores.

use anyhow::Result;
use axum::Router;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::middleware;
use crate::routes::{DataRoutes, HealthRoutes, IngestRoutes, McpRoutes};
use crate::storage::WorkoutStore;

/// Shared server resources injected into route handlers
pub struct ServerResources {
    /// The canonical workout store
    pub store: WorkoutStore,
    /// Loaded server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle a store and configuration for handler injection
    #[must_use]
    pub fn new(store: WorkoutStore, config: ServerConfig) -> Self {
        Self { store, config }
    }
}

/// The workout MCP HTTP server
pub struct WorkoutMcpServer {
    resources: Arc<ServerResources>,
}

impl WorkoutMcpServer {
    /// Create a server around shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(IngestRoutes::routes(self.resources.clone()))
            .merge(DataRoutes::routes(self.resources.clone()))
            .merge(McpRoutes::routes(self.resources.clone()))
            .layer(middleware::setup_cors(&self.resources.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server fails
    /// while serving.
    pub async fn run(self, port: u16) -> Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
        info!("HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
