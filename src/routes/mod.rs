// ABOUTME: Route module organization for the Aminotrack HTTP API
// ABOUTME: Merges the per-domain routers and applies CORS and request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the Aminotrack server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the database or the service layer.

/// Daily needs, consumed sums, and coverage routes
pub mod amino_profile;
/// Food item listing routes
pub mod food_items;
/// Health check and readiness routes
pub mod health;
/// Nutrition log routes
pub mod nutrition_logs;
/// Single user profile routes
pub mod users;

pub use amino_profile::AminoProfileRoutes;
pub use food_items::FoodItemRoutes;
pub use health::HealthRoutes;
pub use nutrition_logs::NutritionLogRoutes;
pub use users::UserRoutes;

use crate::middleware::{setup_cors, setup_trace};
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AminoProfileRoutes::routes(Arc::clone(&resources)))
        .merge(FoodItemRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionLogRoutes::routes(Arc::clone(&resources)))
        .merge(UserRoutes::routes(resources))
        .layer(cors)
        .layer(setup_trace())
}
