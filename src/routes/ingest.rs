// ABOUTME: Ingestion route handlers for workout data pushed from phone automation clients
// ABOUTME: Validates incoming payloads, enforces the shared secret, and feeds the workout store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Workout ingestion routes
//!
//! Accepts workout payloads from the phone automation client, validates the
//! required identity fields, and hands normalized records to the store.
//! Both routes honor the shared-secret check; with no secret configured
//! they are open by design.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{delete, post},
    Json, Router,
};
use http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::auth;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutRecord;
use crate::server::ServerResources;

/// Incoming workout payload.
///
/// The canonical schema keys are `type`/`start`/`end`; identity fields are
/// optional here so their absence surfaces as a 400 with a named field
/// instead of a deserialization failure.
#[derive(Debug, Deserialize)]
struct WorkoutPayload {
    #[serde(rename = "type")]
    workout_type: Option<String>,
    start: Option<String>,
    end: Option<String>,
    duration_minutes: Option<f64>,
    calories: Option<f64>,
    distance: Option<f64>,
    heart_rate_avg: Option<u32>,
    heart_rate_max: Option<u32>,
    source: Option<String>,
}

impl WorkoutPayload {
    fn into_record(self) -> AppResult<WorkoutRecord> {
        let workout_type = self
            .workout_type
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("type"))?;
        let start = self
            .start
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("start"))?;

        for (name, value) in [
            ("duration_minutes", self.duration_minutes),
            ("calories", self.calories),
            ("distance", self.distance),
        ] {
            if value.is_some_and(|v| v < 0.0) {
                return Err(AppError::invalid_input(format!(
                    "{name} must be non-negative"
                )));
            }
        }

        Ok(WorkoutRecord {
            workout_type,
            start,
            end: self.end,
            duration_minutes: self.duration_minutes,
            calories: self.calories,
            distance: self.distance,
            heart_rate_avg: self.heart_rate_avg,
            heart_rate_max: self.heart_rate_max,
            source: self
                .source
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| defaults::SOURCE.to_owned()),
            ingested_at: String::new(),
            start_parsed: None,
        })
    }
}

/// Ingestion routes implementation
pub struct IngestRoutes;

impl IngestRoutes {
    /// Create all ingestion routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ingest/workout", post(Self::handle_ingest_workout))
            .route("/ingest/workouts", delete(Self::handle_clear_workouts))
            .with_state(resources)
    }

    /// Handle a single workout pushed from the client
    async fn handle_ingest_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(payload): Json<WorkoutPayload>,
    ) -> Result<Response, AppError> {
        auth::require_api_key(&headers, resources.config.auth.api_key.as_deref())?;

        let record = payload.into_record()?;
        let label = record.workout_type.clone();
        let is_new = resources.store.add(record);
        info!(workout_type = %label, new = is_new, "workout ingested");

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "success",
                "message": format!("Workout '{label}' ingested successfully"),
                "new": is_new,
                "total": resources.store.count()
            })),
        )
            .into_response())
    }

    /// Handle clearing the entire store. Use with caution.
    async fn handle_clear_workouts(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        auth::require_api_key(&headers, resources.config.auth.api_key.as_deref())?;

        let cleared = resources.store.clear();
        info!(cleared, "workout store cleared");

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "success",
                "message": format!("Cleared {cleared} workouts"),
                "cleared": cleared
            })),
        )
            .into_response())
    }
}
