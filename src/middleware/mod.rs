// ABOUTME: HTTP middleware for cross-origin resource sharing
// ABOUTME: Declares middleware submodules applied to the router in the composition root
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP middleware modules

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
