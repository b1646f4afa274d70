// ABOUTME: Amino acid profile route handlers for daily needs, consumed sums, and coverage
// ABOUTME: Thin wrappers around the amino acid profile service returning name-keyed maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Amino acid profile routes
//!
//! Every response is a JSON object keyed by amino acid name, for example
//! `{"Lysin": 2.76, "Leucin": 2.7}`. Values are grams for daily needs and
//! sums, and percentages for coverage.

use crate::resources::ServerResources;
use aminotrack_core::errors::AppError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Amino acid profile routes
pub struct AminoProfileRoutes;

impl AminoProfileRoutes {
    /// Create all amino acid profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/amino-profile/daily-needs", get(Self::handle_daily_needs))
            .route("/amino-profile/sum", post(Self::handle_sum))
            .route("/amino-profile/coverage", post(Self::handle_coverage))
            .with_state(resources)
    }

    /// Handle personalized daily needs
    async fn handle_daily_needs(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let needs = resources.amino_profile.daily_needs().await?;
        Ok((StatusCode::OK, Json(needs)).into_response())
    }

    /// Handle consumed sums across the active log
    async fn handle_sum(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let sums = resources.amino_profile.consumed_sums().await?;
        Ok((StatusCode::OK, Json(sums)).into_response())
    }

    /// Handle coverage of the personalized requirement
    async fn handle_coverage(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let coverage = resources.amino_profile.coverage().await?;
        Ok((StatusCode::OK, Json(coverage)).into_response())
    }
}
