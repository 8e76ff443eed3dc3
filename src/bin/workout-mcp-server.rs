// ABOUTME: Server binary for the workout MCP service
// ABOUTME: Bootstraps configuration, logging, the workout store, and the HTTP listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Workout MCP Server Binary
//!
//! Starts the workout ingestion and query API with MCP-style tool
//! discovery for AI assistant integrations.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use workout_mcp_server::{
    config::ServerConfig,
    logging,
    server::{ServerResources, WorkoutMcpServer},
    storage::WorkoutStore,
};

#[derive(Parser)]
#[command(name = "workout-mcp-server")]
#[command(about = "Workout ingestion and query API with MCP tool discovery")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Workout MCP Server");
    info!("{}", config.summary());
    if !config.auth.is_enabled() {
        warn!("WORKOUT_API_KEY is not set; ingestion endpoints are open");
    }

    let store = WorkoutStore::new(&config.storage.path, config.timezone);
    info!(count = store.count(), "workout store ready");

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(store, config));
    let server = WorkoutMcpServer::new(resources);

    display_available_endpoints(port);
    info!("Ready to serve workout data!");

    server.run(port).await
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("Ingestion:");
    info!("   Ingest Workout:   POST   http://{host}:{port}/ingest/workout");
    info!("   Clear Workouts:   DELETE http://{host}:{port}/ingest/workouts");
    info!("Data:");
    info!("   Recent Workouts:  GET http://{host}:{port}/data/workouts?days=7");
    info!("   Today:            GET http://{host}:{port}/data/workouts/today");
    info!("   By Date:          GET http://{host}:{port}/data/workouts/date/{{date}}");
    info!("   By Type:          GET http://{host}:{port}/data/workouts/type/{{workout_type}}");
    info!("   Summary:          GET http://{host}:{port}/data/workouts/summary?days=7");
    info!("   Stats:            GET http://{host}:{port}/data/stats");
    info!("MCP Discovery:");
    info!("   Capabilities:     GET http://{host}:{port}/mcp");
    info!("   Tools:            GET http://{host}:{port}/mcp/tools/{{tool_name}}");
    info!("Monitoring:");
    info!("   Health Check:     GET http://{host}:{port}/health");
    info!("   Readiness:        GET http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
