// ABOUTME: MCP (Model Context Protocol) route handlers for AI assistant integration
// ABOUTME: Provides REST-style MCP tool discovery and tool invocation over the workout store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! MCP protocol routes for AI assistant integration
//!
//! A simplified REST-based MCP surface: `GET /mcp` returns a static
//! capability description and each tool is invokable as a GET under
//! `/mcp/tools/`. Tool responses wrap their payload in a `result` envelope.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use crate::constants::{defaults, service_names, workout_types};
use crate::errors::AppError;
use crate::server::ServerResources;

/// Query parameters accepted by the workout tools
#[derive(Debug, Deserialize, Default)]
struct ToolQuery {
    days: Option<u32>,
    workout_type: Option<String>,
}

/// MCP routes implementation
pub struct McpRoutes;

impl McpRoutes {
    /// Create all MCP routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/mcp", get(Self::handle_discovery))
            .route("/mcp/tools/get_workouts", get(Self::handle_get_workouts))
            .route(
                "/mcp/tools/get_todays_workouts",
                get(Self::handle_get_todays_workouts),
            )
            .route(
                "/mcp/tools/get_workout_summary",
                get(Self::handle_get_workout_summary),
            )
            .with_state(resources)
    }

    /// Handle MCP service discovery: available tools and their parameters
    async fn handle_discovery() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "name": service_names::WORKOUT_MCP_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Workout data ingested from a phone automation client",
            "tools": [
                {
                    "name": "get_workouts",
                    "description": "Get workouts from the last N days, optionally filtered by type",
                    "parameters": {
                        "days": {"type": "integer", "default": defaults::QUERY_DAYS},
                        "workout_type": {"type": "string", "optional": true}
                    }
                },
                {
                    "name": "get_todays_workouts",
                    "description": "Get all workouts logged today in the service timezone",
                    "parameters": {}
                },
                {
                    "name": "get_workout_summary",
                    "description": "Get workout statistics and summary for N days",
                    "parameters": {
                        "days": {"type": "integer", "default": defaults::QUERY_DAYS}
                    }
                }
            ],
            "supported_workout_types": workout_types::SUPPORTED
        }))
    }

    /// MCP tool: get workouts for the last N days, optionally by type
    async fn handle_get_workouts(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ToolQuery>,
    ) -> Result<Response, AppError> {
        let days = params.days.unwrap_or(defaults::QUERY_DAYS);
        let workouts = params.workout_type.as_ref().map_or_else(
            || resources.store.get_recent(days),
            |workout_type| resources.store.get_by_type(workout_type),
        );

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "result": {
                    "workouts": workouts,
                    "count": workouts.len(),
                    "days": days,
                    "filter": params.workout_type
                }
            })),
        )
            .into_response())
    }

    /// MCP tool: get today's workouts
    async fn handle_get_todays_workouts(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let timezone = resources.config.timezone;
        let today = Utc::now().with_timezone(&timezone).format("%Y-%m-%d");
        let workouts = resources.store.get_today();

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "result": {
                    "date": today.to_string(),
                    "workouts": workouts,
                    "count": workouts.len(),
                    "timezone": timezone.name()
                }
            })),
        )
            .into_response())
    }

    /// MCP tool: get the workout summary for the last N days
    async fn handle_get_workout_summary(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ToolQuery>,
    ) -> Result<Response, AppError> {
        let days = params.days.unwrap_or(defaults::QUERY_DAYS);
        let summary = resources.store.get_summary(days);

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "result": {
                    "summary": summary
                }
            })),
        )
            .into_response())
    }
}
