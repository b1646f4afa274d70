// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, seeded fixtures, and a ready router
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `aminotrack_server`

use aminotrack_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::{seed, Database},
    models::{AminoAcid, AminoAcidTable, FoodItem, RequirementConstant, User},
    resources::ServerResources,
    routes::build_router,
};
use anyhow::Result;
use axum::Router;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Empty, migrated in-memory database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// In-memory database holding the demo user, foods, empty log, and constants
pub async fn create_seeded_database() -> Result<(Database, seed::SeedSummary)> {
    let database = create_test_database().await?;
    let summary = seed::seed_demo_data(&database)
        .await?
        .ok_or_else(|| anyhow::anyhow!("fresh database already had a user"))?;
    Ok((database, summary))
}

/// Server configuration pointing at the in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: DatabaseUrl::Memory,
        ..ServerConfig::default()
    }
}

/// Shared resources over `database` with the default modifier rules
pub fn create_test_resources(database: Database) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(database, Arc::new(test_config())))
}

/// Full application router over `database`
pub fn create_test_router(database: Database) -> Router {
    build_router(create_test_resources(database))
}

/// Full application router over `database` with the given configuration
pub fn create_test_router_with_config(database: Database, config: ServerConfig) -> Router {
    build_router(Arc::new(ServerResources::new(database, Arc::new(config))))
}

/// Reference constants (mg/kg) for all 10 amino acids
pub fn reference_constants() -> Vec<RequirementConstant> {
    [
        (AminoAcid::Lysine, 30.0),
        (AminoAcid::Leucine, 39.0),
        (AminoAcid::Isoleucine, 20.0),
        (AminoAcid::Valine, 26.0),
        (AminoAcid::Methionine, 15.0),
        (AminoAcid::Phenylalanine, 25.0),
        (AminoAcid::Threonine, 15.0),
        (AminoAcid::Tryptophan, 4.0),
        (AminoAcid::Histidine, 10.0),
        (AminoAcid::Glycine, 35.0),
    ]
    .into_iter()
    .map(|(amino_acid, mg_per_kg)| RequirementConstant::new(amino_acid, mg_per_kg))
    .collect()
}

/// User with the given flags and weight
pub fn test_user(weight_kg: f64, is_athlete: bool, is_vegan: bool, is_longevity: bool) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Tester".to_owned(),
        age: Some(35),
        weight_kg,
        is_athlete,
        is_vegan,
        is_longevity_focused: is_longevity,
    }
}

/// Food item with the given profile entries
pub fn test_food(name: &str, entries: &[(AminoAcid, f64)]) -> FoodItem {
    FoodItem::new(name, entries.iter().copied().collect::<AminoAcidTable>())
}

/// Seeded food item id by name
pub async fn food_id(database: &Database, name: &str) -> Result<Uuid> {
    database
        .list_food_items()
        .await?
        .into_iter()
        .find(|item| item.name == name)
        .map(|item| item.id)
        .ok_or_else(|| anyhow::anyhow!("no seeded food named {name}"))
}

/// Assert two amounts agree to within rounding noise
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// Assert every expected entry is present in `table` with the given value
pub fn assert_table(table: &AminoAcidTable, expected: &[(AminoAcid, f64)]) {
    assert_eq!(table.len(), expected.len(), "table: {table:?}");
    for (amino_acid, value) in expected {
        let actual = table
            .get(*amino_acid)
            .unwrap_or_else(|| panic!("{amino_acid} missing from {table:?}"));
        assert!(
            (actual - value).abs() < 1e-6,
            "{amino_acid}: expected {value}, got {actual}"
        );
    }
}
