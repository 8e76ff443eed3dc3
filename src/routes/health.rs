// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides system health, readiness, and service identity endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health check routes for service monitoring
//!
//! This module provides the service identity root plus health and
//! readiness endpoints for monitoring and load balancer health checks.

use axum::{routing::get, Json, Router};

use crate::constants::service_names;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> Router {
        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "service": service_names::WORKOUT_MCP_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ok",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
    }
}
