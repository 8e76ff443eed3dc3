// ABOUTME: Data route handlers for querying stored workout records
// ABOUTME: Provides windowed, per-date, and per-type queries plus summaries and storage stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Workout query routes
//!
//! Read-only endpoints over the workout store. All date reasoning ("today",
//! recent windows) happens in the configured civil timezone.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use crate::constants::{defaults, limits};
use crate::errors::AppError;
use crate::server::ServerResources;

/// Query parameters for windowed workout listings
#[derive(Debug, Deserialize, Default)]
struct WorkoutsQuery {
    days: Option<u32>,
    workout_type: Option<String>,
}

fn validated_days(days: Option<u32>) -> Result<u32, AppError> {
    let days = days.unwrap_or(defaults::QUERY_DAYS);
    if (1..=limits::MAX_QUERY_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(AppError::invalid_input(format!(
            "days must be between 1 and {}",
            limits::MAX_QUERY_DAYS
        )))
    }
}

/// Data routes implementation
pub struct DataRoutes;

impl DataRoutes {
    /// Create all data query routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/data/workouts", get(Self::handle_get_workouts))
            .route("/data/workouts/today", get(Self::handle_get_today))
            .route("/data/workouts/date/:date", get(Self::handle_get_by_date))
            .route(
                "/data/workouts/type/:workout_type",
                get(Self::handle_get_by_type),
            )
            .route("/data/workouts/summary", get(Self::handle_get_summary))
            .route("/data/stats", get(Self::handle_get_stats))
            .with_state(resources)
    }

    /// Handle windowed workout listing, optionally filtered by type.
    /// A type filter takes precedence over the day window.
    async fn handle_get_workouts(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<WorkoutsQuery>,
    ) -> Result<Response, AppError> {
        let days = validated_days(params.days)?;
        let workouts = params.workout_type.as_ref().map_or_else(
            || resources.store.get_recent(days),
            |workout_type| resources.store.get_by_type(workout_type),
        );

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "workouts": workouts,
                "count": workouts.len(),
                "days": days,
                "filter": params.workout_type
            })),
        )
            .into_response())
    }

    /// Handle today's workouts in the configured timezone
    async fn handle_get_today(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let timezone = resources.config.timezone;
        let today = Utc::now().with_timezone(&timezone).format("%Y-%m-%d");
        let workouts = resources.store.get_today();

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "date": today.to_string(),
                "workouts": workouts,
                "count": workouts.len(),
                "timezone": timezone.name()
            })),
        )
            .into_response())
    }

    /// Handle workouts for a specific date (`YYYY-MM-DD`)
    async fn handle_get_by_date(
        State(resources): State<Arc<ServerResources>>,
        Path(date): Path<String>,
    ) -> Result<Response, AppError> {
        let workouts = resources.store.get_by_date(&date);

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "date": date,
                "workouts": workouts,
                "count": workouts.len()
            })),
        )
            .into_response())
    }

    /// Handle workouts of a specific type, matched case-insensitively
    async fn handle_get_by_type(
        State(resources): State<Arc<ServerResources>>,
        Path(workout_type): Path<String>,
    ) -> Result<Response, AppError> {
        let workouts = resources.store.get_by_type(&workout_type);

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "workout_type": workout_type,
                "workouts": workouts,
                "count": workouts.len()
            })),
        )
            .into_response())
    }

    /// Handle the aggregate summary for the last N days
    async fn handle_get_summary(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<WorkoutsQuery>,
    ) -> Result<Response, AppError> {
        let days = validated_days(params.days)?;
        let summary = resources.store.get_summary(days);
        let timezone = resources.config.timezone;

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "summary": summary,
                "generated_at": Utc::now().with_timezone(&timezone).to_rfc3339(),
                "timezone": timezone.name()
            })),
        )
            .into_response())
    }

    /// Handle storage statistics, including persistence health
    async fn handle_get_stats(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let status = resources.store.persistence_status();

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "total_workouts_stored": resources.store.count(),
                "storage_type": "in-memory with file persistence",
                "persistence": status
            })),
        )
            .into_response())
    }
}
