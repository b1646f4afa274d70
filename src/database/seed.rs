// ABOUTME: Demo data for local development and manual testing
// ABOUTME: One vegan, longevity-focused user, ten plant foods, an empty log, and the constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Demo data seeding
//!
//! Amounts are grams of amino acid per 100 g portion; requirement constants
//! are milligrams per kilogram of body weight per day.

use super::Database;
use aminotrack_core::errors::AppResult;
use aminotrack_core::models::{AminoAcid, AminoAcidTable, FoodItem, RequirementConstant, User};
use tracing::{debug, info};
use uuid::Uuid;

/// Column order of [`DEMO_FOODS`] amounts
pub const FOOD_COLUMNS: [AminoAcid; 10] = [
    AminoAcid::Lysine,
    AminoAcid::Leucine,
    AminoAcid::Isoleucine,
    AminoAcid::Valine,
    AminoAcid::Methionine,
    AminoAcid::Phenylalanine,
    AminoAcid::Threonine,
    AminoAcid::Tryptophan,
    AminoAcid::Histidine,
    AminoAcid::Glycine,
];

/// Plant foods with their amino acid amounts in [`FOOD_COLUMNS`] order
pub const DEMO_FOODS: [(&str, [f64; 10]); 10] = [
    ("Linsen", [1.7, 1.8, 1.1, 1.2, 0.2, 1.2, 0.9, 0.2, 0.7, 1.1]),
    ("Quinoa", [0.8, 0.8, 0.5, 0.6, 0.3, 0.6, 0.4, 0.2, 0.4, 0.6]),
    ("Kichererbsen", [1.4, 1.5, 0.9, 0.9, 0.3, 1.1, 0.8, 0.2, 0.6, 0.7]),
    ("Sojabohnen", [2.7, 3.3, 2.0, 2.0, 0.5, 2.1, 1.8, 0.6, 1.1, 1.9]),
    ("Amaranth", [0.7, 0.9, 0.6, 0.7, 0.2, 0.5, 0.6, 0.2, 0.4, 0.8]),
    ("Hanfsamen", [0.6, 1.6, 0.9, 1.1, 0.6, 1.0, 0.6, 0.2, 0.4, 1.2]),
    ("Chiasamen", [0.9, 1.3, 0.7, 0.9, 0.4, 1.0, 0.8, 0.4, 0.5, 0.9]),
    ("Haferflocken", [0.6, 0.9, 0.5, 0.6, 0.2, 0.6, 0.5, 0.2, 0.3, 0.5]),
    ("Sonnenblumenkerne", [0.6, 1.3, 0.7, 0.9, 0.5, 0.9, 0.5, 0.3, 0.4, 1.0]),
    ("Erbsen", [0.3, 0.3, 0.2, 0.2, 0.1, 0.2, 0.2, 0.1, 0.1, 0.4]),
];

/// Requirement constants in mg per kg of body weight
pub const DEMO_REQUIREMENTS: [(AminoAcid, f64); 10] = [
    (AminoAcid::Lysine, 30.0),
    (AminoAcid::Leucine, 39.0),
    (AminoAcid::Isoleucine, 20.0),
    (AminoAcid::Valine, 26.0),
    (AminoAcid::Phenylalanine, 25.0),
    (AminoAcid::Methionine, 9.0),
    (AminoAcid::Threonine, 15.0),
    (AminoAcid::Tryptophan, 4.0),
    (AminoAcid::Histidine, 10.0),
    (AminoAcid::Glycine, 10.0),
];

/// What [`seed_demo_data`] found or wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    /// Id of the user the demo data belongs to
    pub user_id: Uuid,
    /// Active nutrition log of that user
    pub log_id: Uuid,
    /// Number of food items written
    pub food_items: usize,
    /// Number of requirement constants written
    pub requirement_constants: usize,
    /// Whether the demo user was created by this run
    pub created_user: bool,
    /// Whether the log was created by this run
    pub created_log: bool,
}

impl SeedSummary {
    /// Whether this run wrote anything
    #[must_use]
    pub const fn wrote_anything(&self) -> bool {
        self.created_user
            || self.created_log
            || self.food_items > 0
            || self.requirement_constants > 0
    }
}

/// The demo user: 30 years, 70 kg, vegan and longevity-focused
#[must_use]
pub fn demo_user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Test User".to_owned(),
        age: Some(30),
        weight_kg: 70.0,
        is_athlete: false,
        is_vegan: true,
        is_longevity_focused: true,
    }
}

/// Demo food items with fresh ids
#[must_use]
pub fn demo_food_items() -> Vec<FoodItem> {
    DEMO_FOODS
        .iter()
        .map(|(name, amounts)| {
            let profile: AminoAcidTable = FOOD_COLUMNS.into_iter().zip(*amounts).collect();
            FoodItem::new(*name, profile)
        })
        .collect()
}

/// Demo requirement constants
#[must_use]
pub fn demo_requirement_constants() -> Vec<RequirementConstant> {
    DEMO_REQUIREMENTS
        .iter()
        .map(|&(amino_acid, mg_per_kg)| RequirementConstant::new(amino_acid, mg_per_kg))
        .collect()
}

/// Seed the demo user, foods, an empty log, and the requirement constants
///
/// Each part is checked on its own and only written when missing, so a run
/// that failed halfway is completed by the next one. Returns `None` when
/// every part was already present.
///
/// # Errors
///
/// Returns an error if any read or write fails
pub async fn seed_demo_data(database: &Database) -> AppResult<Option<SeedSummary>> {
    let (user_id, created_user) = match database.get_user().await? {
        Some(existing) => {
            debug!(user_id = %existing.id, "User already exists, keeping it");
            (existing.id, false)
        }
        None => (database.create_user(&demo_user()).await?, true),
    };

    let food_items = if database.list_food_items().await?.is_empty() {
        let food_items = demo_food_items();
        for food_item in &food_items {
            database.save_food_item(food_item).await?;
        }
        food_items.len()
    } else {
        0
    };

    let (log_id, created_log) = match database.get_latest_log().await? {
        Some(log) if log.user_id == user_id => (log.id, false),
        _ => (database.create_log_for_user(user_id).await?.id, true),
    };

    let requirement_constants = if database.get_requirement_constants().await?.is_empty() {
        let constants = demo_requirement_constants();
        database.save_requirement_constants(&constants).await?;
        constants.len()
    } else {
        0
    };

    let summary = SeedSummary {
        user_id,
        log_id,
        food_items,
        requirement_constants,
        created_user,
        created_log,
    };

    if !summary.wrote_anything() {
        info!(%user_id, "Demo data already present, nothing to seed");
        return Ok(None);
    }
    info!(?summary, "Seeded demo data");
    Ok(Some(summary))
}
