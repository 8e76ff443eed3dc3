// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides router construction around throwaway stores and HTTP request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

//! Shared test utilities for `workout_mcp_server`
//!
//! Builds routers around isolated stores in temporary directories and
//! executes requests against them with `tower::ServiceExt::oneshot`, so no
//! listener is needed.

use axum::body::{to_bytes, Body};
use axum::Router;
use chrono::Utc;
use chrono_tz::America::Los_Angeles;
use http::{Method, Request, StatusCode};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use workout_mcp_server::{
    config::{AuthConfig, CorsConfig, ServerConfig, StorageConfig},
    server::{ServerResources, WorkoutMcpServer},
    storage::WorkoutStore,
};

/// Configuration pointing at a throwaway store inside `dir`
pub fn test_config(api_key: Option<&str>, dir: &TempDir) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        timezone: Los_Angeles,
        storage: StorageConfig {
            path: dir.path().join("workouts.json"),
        },
        auth: AuthConfig {
            api_key: api_key.map(str::to_owned),
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    }
}

/// Full application router around an isolated store
pub fn test_router(api_key: Option<&str>, dir: &TempDir) -> Router {
    test_router_with_config(test_config(api_key, dir))
}

/// Full application router from an explicit configuration
pub fn test_router_with_config(config: ServerConfig) -> Router {
    let store = WorkoutStore::new(&config.storage.path, config.timezone);
    WorkoutMcpServer::new(Arc::new(ServerResources::new(store, config))).router()
}

/// Today's date string in the service timezone
pub fn today_in_service_tz() -> String {
    Utc::now()
        .with_timezone(&Los_Angeles)
        .format("%Y-%m-%d")
        .to_string()
}

/// Execute a request and return (status, parsed JSON body)
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

/// GET helper
pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri, &[], None).await
}

/// POST-JSON helper
pub async fn post_json(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, Method::POST, uri, headers, Some(body)).await
}

/// DELETE helper
pub async fn delete(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, serde_json::Value) {
    send(app, Method::DELETE, uri, headers, None).await
}
