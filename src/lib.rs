// ABOUTME: Main library entry point for the workout MCP server
// ABOUTME: Provides workout ingestion, query, and MCP tool discovery over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Workout MCP Server
//!
//! An HTTP service that ingests workout records pushed from a phone
//! automation client, deduplicates and stores them, and exposes query and
//! summary endpoints, including an MCP-style tool discovery API for AI
//! assistant integrations.
//!
//! ## Architecture
//!
//! - **Storage**: in-memory keyed workout store with file persistence
//! - **Routes**: HTTP handlers for ingestion, queries, and MCP discovery
//! - **Models**: workout record and summary data structures
//! - **Config**: environment-based server configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workout_mcp_server::config::ServerConfig;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Workout MCP Server configured with port: {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Shared-secret authentication for mutating endpoints
pub mod auth;

/// Environment-based server configuration
pub mod config;

/// Application constants and default values
pub mod constants;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Workout record and summary data models
pub mod models;

/// `HTTP` routes for ingestion, queries, and MCP discovery
pub mod routes;

/// Server composition root and HTTP listener
pub mod server;

/// In-memory workout store with deduplication and file persistence
pub mod storage;
