// ABOUTME: Food item route handlers
// ABOUTME: Lists the food items available for logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::resources::ServerResources;
use aminotrack_core::errors::AppError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Food item routes
pub struct FoodItemRoutes;

impl FoodItemRoutes {
    /// Create all food item routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/food-items/all", get(Self::handle_list))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let items = resources.database.list_food_items().await?;
        Ok((StatusCode::OK, Json(items)).into_response())
    }
}
