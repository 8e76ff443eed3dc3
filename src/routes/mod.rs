// ABOUTME: Route module organization for the workout MCP server HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain with clean separation of concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP route handlers, grouped by domain
//!
//! Each submodule exposes an `XxxRoutes` struct whose `routes()` builds an
//! `axum::Router`; the composition root in [`crate::server`] merges them
//! and applies middleware.

/// Workout query and summary endpoints
pub mod data;

/// Health, readiness, and service identity endpoints
pub mod health;

/// Workout ingestion and clearing endpoints
pub mod ingest;

/// MCP-style tool discovery and tool invocation endpoints
pub mod mcp;

pub use data::DataRoutes;
pub use health::HealthRoutes;
pub use ingest::IngestRoutes;
pub use mcp::McpRoutes;
