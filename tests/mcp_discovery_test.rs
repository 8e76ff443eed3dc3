// ABOUTME: Integration tests for the MCP discovery and tool invocation routes
// ABOUTME: Verifies the static capability payload and the result envelopes of each tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used)]

//! MCP route tests for `workout_mcp_server`

use http::StatusCode;
use serde_json::json;
use tempfile::TempDir;

mod common;

#[tokio::test]
async fn discovery_lists_tools_and_vocabulary() {
    let dir = TempDir::new().unwrap();
    let app = common::test_router(None, &dir);

    let (status, body) = common::get(app, "/mcp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "workout-mcp-server");

    let tools = body["tools"].as_array().unwrap();
    let names: Vec<&str> = tools
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["get_workouts", "get_todays_workouts", "get_workout_summary"]
    );
    assert_eq!(tools[0]["parameters"]["days"]["default"], 7);

    let types = body["supported_workout_types"].as_array().unwrap();
    assert!(types.iter().any(|t| t == "Yoga"));
    assert_eq!(types.len(), 10);
}

#[tokio::test]
async fn get_workouts_tool_wraps_result_envelope() {
    let dir = TempDir::new().unwrap();
    let app = common::test_router(None, &dir);
    common::post_json(
        app.clone(),
        "/ingest/workout",
        &[],
        json!({
            "type": "Running",
            "start": format!("{}T08:00:00-08:00", common::today_in_service_tz())
        }),
    )
    .await;

    let (status, body) = common::get(app.clone(), "/mcp/tools/get_workouts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["count"], 1);
    assert_eq!(body["result"]["days"], 7);
    assert_eq!(body["result"]["workouts"][0]["type"], "Running");

    let (_, body) = common::get(app, "/mcp/tools/get_workouts?workout_type=running").await;
    assert_eq!(body["result"]["filter"], "running");
    assert_eq!(body["result"]["count"], 1);
}

#[tokio::test]
async fn todays_workouts_tool_reports_timezone() {
    let dir = TempDir::new().unwrap();
    let app = common::test_router(None, &dir);

    let (status, body) = common::get(app, "/mcp/tools/get_todays_workouts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["date"], common::today_in_service_tz());
    assert_eq!(body["result"]["timezone"], "America/Los_Angeles");
    assert_eq!(body["result"]["count"], 0);
}

#[tokio::test]
async fn workout_summary_tool_reconciles_with_ingested_data() {
    let dir = TempDir::new().unwrap();
    let app = common::test_router(None, &dir);
    common::post_json(
        app.clone(),
        "/ingest/workout",
        &[],
        json!({
            "type": "Rowing",
            "start": format!("{}T08:00:00-08:00", common::today_in_service_tz()),
            "duration_minutes": 20.0,
            "calories": 180.0
        }),
    )
    .await;

    let (status, body) = common::get(app, "/mcp/tools/get_workout_summary?days=3").await;
    assert_eq!(status, StatusCode::OK);
    let summary = &body["result"]["summary"];
    assert_eq!(summary["period_days"], 3);
    assert_eq!(summary["total_workouts"], 1);
    assert_eq!(summary["by_type"]["Rowing"]["total_duration"], 20.0);
}

#[tokio::test]
async fn mcp_routes_are_readable_without_api_key() {
    let dir = TempDir::new().unwrap();
    let app = common::test_router(Some("secret"), &dir);

    let (status, _) = common::get(app, "/mcp").await;
    assert_eq!(status, StatusCode::OK);
}
