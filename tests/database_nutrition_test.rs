// ABOUTME: Integration tests for SQLite storage of users, foods, logs, and requirement constants
// ABOUTME: Covers the singleton user, log replacement, set semantics, and the active log read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use aminotrack_core::errors::ErrorCode;
use aminotrack_core::models::{AminoAcid, RequirementConstant};
use aminotrack_server::database::{seed, NutritionDataProvider, UserUpdate};
use common::{
    assert_close, create_seeded_database, create_test_database, food_id, reference_constants,
    test_food, test_user,
};
use uuid::Uuid;

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_empty_database_has_no_user() {
    let db = create_test_database().await.unwrap();

    assert!(db.get_user().await.unwrap().is_none());
    let err = db.get_personalization_profile().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NoProfile);
}

#[tokio::test]
async fn test_second_user_is_rejected() {
    let db = create_test_database().await.unwrap();
    let first = test_user(70.0, false, false, false);
    db.create_user(&first).await.unwrap();

    let err = db
        .create_user(&test_user(80.0, true, false, false))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    let stored = db.get_user().await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
}

#[tokio::test]
async fn test_update_user_changes_personalization() {
    let db = create_test_database().await.unwrap();
    let user = test_user(70.0, false, false, false);
    db.create_user(&user).await.unwrap();

    let update = UserUpdate {
        name: "Sam".to_owned(),
        age: Some(41),
        weight_kg: 82.5,
        is_athlete: true,
        is_vegan: false,
        is_longevity_focused: true,
    };
    let updated = db.update_user(&update).await.unwrap();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Sam");

    let profile = db.get_personalization_profile().await.unwrap();
    assert_close(profile.weight_kg, 82.5);
    assert!(profile.is_athlete);
    assert!(!profile.is_vegan);
    assert!(profile.is_longevity_focused);
}

#[tokio::test]
async fn test_update_without_user_fails_with_no_profile() {
    let db = create_test_database().await.unwrap();
    let update = UserUpdate {
        name: "Sam".to_owned(),
        age: None,
        weight_kg: 60.0,
        is_athlete: false,
        is_vegan: false,
        is_longevity_focused: false,
    };

    let err = db.update_user(&update).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NoProfile);
}

// ============================================================================
// Requirement constants
// ============================================================================

#[tokio::test]
async fn test_requirement_constants_upsert_by_amino_acid() {
    let db = create_test_database().await.unwrap();
    db.save_requirement_constants(&reference_constants())
        .await
        .unwrap();
    db.save_requirement_constants(&[RequirementConstant::new(AminoAcid::Methionine, 9.0)])
        .await
        .unwrap();

    let constants = db.get_requirement_constants().await.unwrap();
    assert_eq!(constants.len(), 10);
    let methionine = constants
        .iter()
        .find(|c| c.amino_acid == AminoAcid::Methionine)
        .unwrap();
    assert_close(methionine.mg_per_kg, 9.0);

    assert_eq!(db.clear_requirement_constants().await.unwrap(), 10);
    assert!(db.get_requirement_constants().await.unwrap().is_empty());
}

// ============================================================================
// Food items
// ============================================================================

#[tokio::test]
async fn test_food_item_round_trips_with_profile() {
    let db = create_test_database().await.unwrap();
    let food = test_food(
        "Linsen",
        &[(AminoAcid::Lysine, 1.7), (AminoAcid::Leucine, 1.8)],
    );
    db.save_food_item(&food).await.unwrap();

    let listed = db.list_food_items().await.unwrap();
    assert_eq!(listed, vec![food.summary()]);

    let stored = db.get_food_item(food.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Linsen");
    assert_eq!(stored.amino_acid_profile.len(), 2);
    assert_close(stored.amino_acid_profile.get_or_zero(AminoAcid::Lysine), 1.7);

    assert!(db.get_food_item(Uuid::new_v4()).await.unwrap().is_none());
}

// ============================================================================
// Nutrition logs
// ============================================================================

#[tokio::test]
async fn test_log_for_unknown_user_is_not_found() {
    let db = create_test_database().await.unwrap();

    let err = db.create_log_for_user(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_new_log_replaces_previous_log() {
    let (db, summary) = create_seeded_database().await.unwrap();
    let linsen = food_id(&db, "Linsen").await.unwrap();
    db.add_food_item_to_log(summary.log_id, linsen)
        .await
        .unwrap();

    let replacement = db.create_log_for_user(summary.user_id).await.unwrap();

    assert!(db.get_log(summary.log_id).await.unwrap().is_none());
    let latest = db.get_latest_log().await.unwrap().unwrap();
    assert_eq!(latest.id, replacement.id);
    assert!(latest.food_items.is_empty());
    assert!(db.get_active_log_food_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_food_item_is_linked_at_most_once() {
    let (db, summary) = create_seeded_database().await.unwrap();
    let quinoa = food_id(&db, "Quinoa").await.unwrap();

    assert!(db.add_food_item_to_log(summary.log_id, quinoa).await.unwrap());
    assert!(!db.add_food_item_to_log(summary.log_id, quinoa).await.unwrap());

    let log = db.get_log(summary.log_id).await.unwrap().unwrap();
    assert_eq!(log.food_items.len(), 1);
    assert_eq!(log.food_items[0].food_item_id, quinoa);
    assert_eq!(log.food_items[0].nutrition_log_id, summary.log_id);
}

#[tokio::test]
async fn test_linking_unknown_log_or_food_is_not_found() {
    let (db, summary) = create_seeded_database().await.unwrap();
    let linsen = food_id(&db, "Linsen").await.unwrap();

    let err = db
        .add_food_item_to_log(Uuid::new_v4(), linsen)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = db
        .add_food_item_to_log(summary.log_id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_active_log_items_without_any_log_is_empty() {
    let db = create_test_database().await.unwrap();

    assert!(db.get_latest_log().await.unwrap().is_none());
    assert!(db.get_active_log_food_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_active_log_items_carry_full_profiles() {
    let (db, summary) = create_seeded_database().await.unwrap();
    for name in ["Linsen", "Quinoa"] {
        let id = food_id(&db, name).await.unwrap();
        db.add_food_item_to_log(summary.log_id, id).await.unwrap();
    }

    let items = db.active_log_food_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|profile| profile.len() == 10));

    let lysine: f64 = items
        .iter()
        .map(|profile| profile.get_or_zero(AminoAcid::Lysine))
        .sum();
    assert_close(lysine, 2.5);
}

#[tokio::test]
async fn test_snapshot_reads_profile_constants_and_active_log_together() {
    let (db, summary) = create_seeded_database().await.unwrap();
    for name in ["Linsen", "Quinoa"] {
        let id = food_id(&db, name).await.unwrap();
        db.add_food_item_to_log(summary.log_id, id).await.unwrap();
    }

    let snapshot = db.read_snapshot(true).await.unwrap();
    assert_eq!(snapshot.profile, db.get_personalization_profile().await.unwrap());
    assert_eq!(snapshot.constants.len(), 10);
    assert_eq!(snapshot.food_items, db.get_active_log_food_items().await.unwrap());
    assert_eq!(snapshot.food_items.len(), 2);

    let without_log = db.read_snapshot(false).await.unwrap();
    assert!(without_log.food_items.is_empty());
    assert_eq!(without_log.constants, snapshot.constants);
}

#[tokio::test]
async fn test_snapshot_without_user_is_no_profile() {
    let db = create_test_database().await.unwrap();
    db.save_requirement_constants(&reference_constants())
        .await
        .unwrap();

    let err = db.read_snapshot(true).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NoProfile);
}

// ============================================================================
// Seed data
// ============================================================================

#[tokio::test]
async fn test_seed_runs_once() {
    let (db, summary) = create_seeded_database().await.unwrap();

    assert_eq!(summary.food_items, seed::DEMO_FOODS.len());
    assert_eq!(summary.requirement_constants, 10);
    assert!(seed::seed_demo_data(&db).await.unwrap().is_none());
    assert_eq!(db.list_food_items().await.unwrap().len(), 10);

    let profile = db.personalization_profile().await.unwrap();
    assert!(profile.is_vegan);
    assert!(profile.is_longevity_focused);
    assert!(!profile.is_athlete);
}

#[tokio::test]
async fn test_seed_completes_partial_data() {
    let db = create_test_database().await.unwrap();
    let user = test_user(70.0, false, false, false);
    db.create_user(&user).await.unwrap();

    let summary = seed::seed_demo_data(&db).await.unwrap().unwrap();

    assert_eq!(summary.user_id, user.id);
    assert!(!summary.created_user);
    assert!(summary.created_log);
    assert_eq!(summary.food_items, seed::DEMO_FOODS.len());
    assert_eq!(summary.requirement_constants, 10);
    assert_eq!(db.get_requirement_constants().await.unwrap().len(), 10);
    assert_eq!(
        db.get_latest_log().await.unwrap().unwrap().user_id,
        user.id
    );
}

#[tokio::test]
async fn test_seed_only_fills_missing_constants() {
    let (db, first) = create_seeded_database().await.unwrap();
    db.clear_requirement_constants().await.unwrap();

    let summary = seed::seed_demo_data(&db).await.unwrap().unwrap();

    assert_eq!(summary.user_id, first.user_id);
    assert_eq!(summary.log_id, first.log_id);
    assert!(!summary.created_user);
    assert!(!summary.created_log);
    assert_eq!(summary.food_items, 0);
    assert_eq!(summary.requirement_constants, 10);
    assert_eq!(db.list_food_items().await.unwrap().len(), 10);
    assert!(db.get_personalization_profile().await.is_ok());
    assert_eq!(db.read_snapshot(false).await.unwrap().constants.len(), 10);
}
