// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the web frontend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::environment::CorsConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS settings for the API
///
/// Origins come from `CORS_ALLOWED_ORIGINS`. Only a literal `*` entry allows
/// any origin, and then without credentials. Otherwise exactly the listed
/// origins are allowed with credentials; entries that are not valid header
/// values are skipped, so a list with no valid entry admits no origin.
/// `ServerConfig::validate` rejects such lists before the server starts.
///
/// ```bash
/// # Vite dev server (default)
/// export CORS_ALLOWED_ORIGINS="http://localhost:5173"
///
/// # Allow all origins
/// export CORS_ALLOWED_ORIGINS="*"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    if config.allows_any_origin() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| warn!("Ignoring invalid CORS origin {origin:?}: {e}"))
                .ok()
        })
        .collect();

    if origins.is_empty() {
        warn!("No valid CORS origins configured, cross-origin requests will be refused");
    }

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
