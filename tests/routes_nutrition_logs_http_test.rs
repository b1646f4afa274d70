// ABOUTME: HTTP integration tests for nutrition log routes
// ABOUTME: Covers log creation, food item linking, lookups, and identifier validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{create_seeded_database, create_test_database, create_test_router, food_id};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use uuid::Uuid;

// ============================================================================
// POST /nutrition-logs/create
// ============================================================================

#[tokio::test]
async fn test_create_log_returns_ids_and_becomes_latest() {
    let (db, summary) = create_seeded_database().await.unwrap();

    let response = AxumTestRequest::post("/nutrition-logs/create")
        .json(&json!({ "userId": summary.user_id }))
        .send(create_test_router(db.clone()))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["userId"], summary.user_id.to_string());
    let new_id = body["id"].as_str().unwrap().to_owned();
    assert_ne!(new_id, summary.log_id.to_string());

    let latest: Value = AxumTestRequest::get("/nutrition-logs/latest")
        .send(create_test_router(db))
        .await
        .json();
    assert_eq!(latest["id"], new_id);
    assert_eq!(latest["foodItems"], json!([]));
}

#[tokio::test]
async fn test_create_log_for_unknown_user_is_404() {
    let (db, _) = create_seeded_database().await.unwrap();

    let response = AxumTestRequest::post("/nutrition-logs/create")
        .json(&json!({ "userId": Uuid::new_v4() }))
        .send(create_test_router(db))
        .await;

    assert_eq!(response.status(), 404);
}

// ============================================================================
// POST /nutrition-logs/:log_id/food-items/:food_item_id
// ============================================================================

#[tokio::test]
async fn test_add_food_item_links_it_once() {
    let (db, summary) = create_seeded_database().await.unwrap();
    let linsen = food_id(&db, "Linsen").await.unwrap();
    let uri = format!("/nutrition-logs/{}/food-items/{linsen}", summary.log_id);

    for _ in 0..2 {
        let response = AxumTestRequest::post(&uri)
            .send(create_test_router(db.clone()))
            .await;
        assert_eq!(response.status(), 201);
    }

    let log: Value = AxumTestRequest::get(&format!("/nutrition-logs/{}", summary.log_id))
        .send(create_test_router(db))
        .await
        .json();
    let items = log["foodItems"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["foodItemId"], linsen.to_string());
    assert_eq!(items[0]["nutritionLogId"], summary.log_id.to_string());
}

#[tokio::test]
async fn test_add_unknown_food_item_is_404() {
    let (db, summary) = create_seeded_database().await.unwrap();
    let uri = format!(
        "/nutrition-logs/{}/food-items/{}",
        summary.log_id,
        Uuid::new_v4()
    );

    let response = AxumTestRequest::post(&uri)
        .send(create_test_router(db))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_add_with_malformed_id_is_400() {
    let (db, summary) = create_seeded_database().await.unwrap();
    let uri = format!("/nutrition-logs/{}/food-items/not-a-uuid", summary.log_id);

    let response = AxumTestRequest::post(&uri)
        .send(create_test_router(db))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

// ============================================================================
// GET /nutrition-logs/:id and /nutrition-logs/latest
// ============================================================================

#[tokio::test]
async fn test_get_unknown_log_is_404() {
    let (db, _) = create_seeded_database().await.unwrap();

    let response = AxumTestRequest::get(&format!("/nutrition-logs/{}", Uuid::new_v4()))
        .send(create_test_router(db))
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_get_log_with_malformed_id_is_400() {
    let (db, _) = create_seeded_database().await.unwrap();

    let response = AxumTestRequest::get("/nutrition-logs/12345")
        .send(create_test_router(db))
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_latest_without_logs_is_404() {
    let db = create_test_database().await.unwrap();

    let response = AxumTestRequest::get("/nutrition-logs/latest")
        .send(create_test_router(db))
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_food_items_listing() {
    let (db, _) = create_seeded_database().await.unwrap();

    let response = AxumTestRequest::get("/food-items/all")
        .send(create_test_router(db))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert!(items.iter().all(|item| item["id"].is_string()));
    assert!(items.iter().any(|item| item["name"] == "Sojabohnen"));
}
