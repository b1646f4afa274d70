// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Layers applied around every route of the Aminotrack API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Cross-origin resource sharing for the web frontend
pub mod cors;
/// Request/response tracing spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::setup_trace;
