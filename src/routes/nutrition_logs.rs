// ABOUTME: Nutrition log route handlers for creating logs and linking food items
// ABOUTME: Exposes the active log and individual logs by identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition log routes
//!
//! A user has at most one log; creating a new one replaces the previous log.
//! The most recently created log is the active log that consumption and
//! coverage are computed from.

use crate::resources::ServerResources;
use aminotrack_core::errors::AppError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Request body for creating a log
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNutritionLogRequest {
    /// Owner of the new log
    pub user_id: Uuid,
}

/// Identifiers of a newly created log
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLogCreatedResponse {
    /// Log identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
}

/// Nutrition log routes
pub struct NutritionLogRoutes;

impl NutritionLogRoutes {
    /// Create all nutrition log routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/nutrition-logs/create", post(Self::handle_create))
            .route("/nutrition-logs/latest", get(Self::handle_latest))
            .route("/nutrition-logs/:id", get(Self::handle_get))
            .route(
                "/nutrition-logs/:log_id/food-items/:food_item_id",
                post(Self::handle_add_food_item),
            )
            .with_state(resources)
    }

    /// Handle log creation for the user
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateNutritionLogRequest>,
    ) -> Result<Response, AppError> {
        let log = resources
            .database
            .create_log_for_user(request.user_id)
            .await?;

        let response = NutritionLogCreatedResponse {
            id: log.id,
            user_id: log.user_id,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle linking a food item to a log
    async fn handle_add_food_item(
        State(resources): State<Arc<ServerResources>>,
        Path((log_id, food_item_id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let log_id = parse_path_id(&log_id, "log")?;
        let food_item_id = parse_path_id(&food_item_id, "food item")?;

        resources
            .database
            .add_food_item_to_log(log_id, food_item_id)
            .await?;

        Ok(StatusCode::CREATED.into_response())
    }

    /// Handle fetching a log by identifier
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_path_id(&id, "log")?;
        let log = resources
            .database
            .get_log(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Nutrition log {id}")))?;

        Ok((StatusCode::OK, Json(log)).into_response())
    }

    /// Handle fetching the active log
    async fn handle_latest(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let log = resources
            .database
            .get_latest_log()
            .await?
            .ok_or_else(|| AppError::not_found("Nutrition log"))?;

        Ok((StatusCode::OK, Json(log)).into_response())
    }
}

fn parse_path_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|e| AppError::invalid_input(format!("Invalid {what} id '{raw}': {e}")))
}
