// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP, storage, auth, timezone, and CORS settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management
//!
//! Configuration is environment-only: every setting has a default from
//! [`crate::constants::defaults`] and an override variable named in
//! [`crate::constants::env_config`]. There is no configuration file.

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::constants::{defaults, env_config};

/// Workout persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Flat-file location for the persisted record set
    pub path: PathBuf,
}

/// Shared-secret authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret expected in the `x-api-key` header on mutating endpoints.
    /// `None` leaves those endpoints open; deliberate, but worth a loud
    /// startup log line.
    pub api_key: Option<String>,
}

impl AuthConfig {
    /// Whether mutating endpoints require the shared secret
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Cross-origin resource sharing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin allowlist; empty or "*" allows any origin
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Civil timezone for "today" and date-window computations
    pub timezone: Tz,
    /// Persistence settings
    pub storage: StorageConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `HTTP_PORT` is not a valid port number or
    /// `DEFAULT_TIMEZONE` is not a recognized IANA timezone name.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var(env_config::HTTP_PORT) {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow!("invalid {}: {e}", env_config::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let timezone_name =
            env::var(env_config::DEFAULT_TIMEZONE).unwrap_or_else(|_| defaults::TIMEZONE.into());
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|e| anyhow!("invalid {}: {e}", env_config::DEFAULT_TIMEZONE))?;

        let storage_path = env::var(env_config::WORKOUT_STORAGE_PATH)
            .map_or_else(|_| PathBuf::from(defaults::STORAGE_PATH), PathBuf::from);

        let api_key = env::var(env_config::WORKOUT_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());

        let allowed_origins =
            env::var(env_config::CORS_ALLOWED_ORIGINS).unwrap_or_else(|_| "*".into());

        Ok(Self {
            http_port,
            timezone,
            storage: StorageConfig { path: storage_path },
            auth: AuthConfig { api_key },
            cors: CorsConfig { allowed_origins },
        })
    }

    /// One-line configuration summary for startup logging (never includes
    /// the secret itself)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} timezone={} storage={} auth={} cors={}",
            self.http_port,
            self.timezone,
            self.storage.path.display(),
            if self.auth.is_enabled() {
                "api-key"
            } else {
                "open"
            },
            self.cors.allowed_origins
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            env_config::HTTP_PORT,
            env_config::DEFAULT_TIMEZONE,
            env_config::WORKOUT_STORAGE_PATH,
            env_config::WORKOUT_API_KEY,
            env_config::CORS_ALLOWED_ORIGINS,
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_environment_is_empty() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, defaults::HTTP_PORT);
        assert_eq!(config.timezone.name(), defaults::TIMEZONE);
        assert_eq!(config.storage.path, PathBuf::from(defaults::STORAGE_PATH));
        assert!(!config.auth.is_enabled());
        assert_eq!(config.cors.allowed_origins, "*");
    }

    #[test]
    #[serial]
    fn environment_overrides_are_honored() {
        clear_env();
        env::set_var(env_config::HTTP_PORT, "9999");
        env::set_var(env_config::DEFAULT_TIMEZONE, "America/New_York");
        env::set_var(env_config::WORKOUT_API_KEY, "secret");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 9999);
        assert_eq!(config.timezone.name(), "America/New_York");
        assert!(config.auth.is_enabled());
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_timezone_is_rejected() {
        clear_env();
        env::set_var(env_config::DEFAULT_TIMEZONE, "Mars/Olympus_Mons");
        assert!(ServerConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn blank_api_key_counts_as_unset() {
        clear_env();
        env::set_var(env_config::WORKOUT_API_KEY, "   ");
        let config = ServerConfig::from_env().unwrap();
        assert!(!config.auth.is_enabled());
        clear_env();
    }
}
