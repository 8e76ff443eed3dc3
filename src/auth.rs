// ABOUTME: Shared-secret authentication for mutating HTTP endpoints
// ABOUTME: Verifies the x-api-key header against the configured secret, open when unconfigured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Shared-secret request authentication
//!
//! Mutating endpoints require the `x-api-key` header to match the secret
//! from `WORKOUT_API_KEY`. When no secret is configured the check is a
//! no-op and those endpoints are open; the server logs this posture at
//! startup so it is never silent.

use http::HeaderMap;

use crate::errors::{AppError, AppResult};

/// Header carrying the client's shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Verify the shared secret on a mutating request.
///
/// # Errors
///
/// Returns `AuthRequired` when a secret is configured but the header is
/// absent, and `AuthInvalid` when the header does not match. Passing
/// `expected = None` (no configured secret) always succeeds.
pub fn require_api_key(headers: &HeaderMap, expected: Option<&str>) -> AppResult<()> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(AppError::auth_required)?;

    if provided == expected {
        Ok(())
    } else {
        Err(AppError::auth_invalid("Invalid API key"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;
    use http::HeaderValue;

    fn headers_with_key(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        headers
    }

    #[test]
    fn open_when_no_secret_is_configured() {
        assert!(require_api_key(&HeaderMap::new(), None).is_ok());
    }

    #[test]
    fn missing_header_requires_auth() {
        let err = require_api_key(&HeaderMap::new(), Some("secret")).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
    }

    #[test]
    fn wrong_key_is_invalid() {
        let err = require_api_key(&headers_with_key("nope"), Some("secret")).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn matching_key_passes() {
        assert!(require_api_key(&headers_with_key("secret"), Some("secret")).is_ok());
    }
}
