// ABOUTME: System-wide constants and default configuration values
// ABOUTME: Contains environment variable names, defaults, limits, and the workout type vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Constants Module
//!
//! Application constants grouped by concern. Runtime overrides come from the
//! environment variables named in [`env_config`]; everything else is fixed.

/// Environment variable names recognized by the server
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";

    /// Path of the flat-file workout persistence store
    pub const WORKOUT_STORAGE_PATH: &str = "WORKOUT_STORAGE_PATH";

    /// Shared secret required on mutating endpoints; unset leaves them open
    pub const WORKOUT_API_KEY: &str = "WORKOUT_API_KEY";

    /// IANA timezone name used for "today" and date bucketing
    pub const DEFAULT_TIMEZONE: &str = "DEFAULT_TIMEZONE";

    /// Comma-separated CORS origin allowlist, or "*"
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default values applied when the environment leaves a setting unset
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8080;

    /// Default persistence file location (not durable across redeploys)
    pub const STORAGE_PATH: &str = "/tmp/workouts.json";

    /// Civil timezone for all "today" and date-window computations
    pub const TIMEZONE: &str = "America/Los_Angeles";

    /// Source label assigned when an ingest payload omits one
    pub const SOURCE: &str = "Apple Watch";

    /// Query window applied when a request omits `days`
    pub const QUERY_DAYS: u32 = 7;
}

/// Request parameter bounds enforced by the HTTP facade
pub mod limits {
    /// Largest accepted `days` query window
    pub const MAX_QUERY_DAYS: u32 = 365;
}

/// Service identifiers for logging and discovery payloads
pub mod service_names {
    /// Canonical service name
    pub const WORKOUT_MCP_SERVER: &str = "workout-mcp-server";
}

/// Workout category vocabulary
pub mod workout_types {
    /// Recognized workout type labels, advertised via MCP discovery.
    /// The vocabulary is advisory; ingestion never rejects unknown labels.
    pub const SUPPORTED: [&str; 10] = [
        "Functional Training",
        "Golf",
        "Yoga",
        "Running",
        "Rowing",
        "Walking",
        "Cycling",
        "Swimming",
        "HIIT",
        "Strength Training",
    ];
}
