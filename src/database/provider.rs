// ABOUTME: Data access seam between the requirement pipeline and storage
// ABOUTME: The reads the amino acid profile service needs, implemented by Database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::nutrition_logs::fetch_active_log_food_items;
use super::requirements::fetch_requirement_constants;
use super::users::fetch_user;
use super::Database;
use aminotrack_core::errors::{AppError, AppResult};
use aminotrack_core::models::{
    FoodAminoProfile, PersonalizationProfile, RequirementConstant, User,
};
use async_trait::async_trait;
use tracing::debug;

/// Profile, constants, and active log food items as of a single read
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionSnapshot {
    /// Personalization attributes of the single user
    pub profile: PersonalizationProfile,
    /// Reference requirement constants, possibly empty
    pub constants: Vec<RequirementConstant>,
    /// Amino acid profiles of the active log's food items
    pub food_items: Vec<FoodAminoProfile>,
}

/// Reads the amino acid profile service depends on
#[async_trait]
pub trait NutritionDataProvider: Send + Sync {
    /// Reference requirement constants, possibly empty
    async fn requirement_constants(&self) -> AppResult<Vec<RequirementConstant>>;

    /// Personalization attributes of the single user
    ///
    /// Fails with `NoProfile` when no user exists.
    async fn personalization_profile(&self) -> AppResult<PersonalizationProfile>;

    /// Amino acid profiles of the food items in the active log
    ///
    /// Empty, not an error, when there is no active log.
    async fn active_log_food_items(&self) -> AppResult<Vec<FoodAminoProfile>>;

    /// Profile and constants, plus the active log items when `with_food_items`
    ///
    /// Implementations backed by shared storage read everything from one
    /// consistent view. The default reads each part in turn.
    async fn snapshot(&self, with_food_items: bool) -> AppResult<NutritionSnapshot> {
        let profile = self.personalization_profile().await?;
        let constants = self.requirement_constants().await?;
        let food_items = if with_food_items {
            self.active_log_food_items().await?
        } else {
            Vec::new()
        };

        Ok(NutritionSnapshot {
            profile,
            constants,
            food_items,
        })
    }
}

#[async_trait]
impl NutritionDataProvider for Database {
    async fn requirement_constants(&self) -> AppResult<Vec<RequirementConstant>> {
        self.get_requirement_constants().await
    }

    async fn personalization_profile(&self) -> AppResult<PersonalizationProfile> {
        self.get_personalization_profile().await
    }

    async fn active_log_food_items(&self) -> AppResult<Vec<FoodAminoProfile>> {
        self.get_active_log_food_items().await
    }

    async fn snapshot(&self, with_food_items: bool) -> AppResult<NutritionSnapshot> {
        self.read_snapshot(with_food_items).await
    }
}

impl Database {
    /// Read the profile, constants, and optionally the active log items in
    /// one read transaction
    ///
    /// # Errors
    ///
    /// - `NoProfile` if no user exists
    /// - `DatabaseError` if a query fails
    pub async fn read_snapshot(&self, with_food_items: bool) -> AppResult<NutritionSnapshot> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let profile = fetch_user(&mut *tx)
            .await?
            .as_ref()
            .map(User::personalization)
            .ok_or_else(AppError::no_profile)?;
        let constants = fetch_requirement_constants(&mut *tx).await?;
        let food_items = if with_food_items {
            fetch_active_log_food_items(&mut *tx).await?
        } else {
            Vec::new()
        };

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;

        debug!(
            constants = constants.len(),
            food_items = food_items.len(),
            "Read nutrition snapshot"
        );
        Ok(NutritionSnapshot {
            profile,
            constants,
            food_items,
        })
    }
}
