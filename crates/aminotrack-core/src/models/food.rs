// ABOUTME: Food item and nutrition log records for consumption tracking
// ABOUTME: A log links a set of food items, each carrying an amino acid profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::amino::FoodAminoProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Food item with its amino acid profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Unique identifier
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Grams of each amino acid per consumed unit
    pub amino_acid_profile: FoodAminoProfile,
}

impl FoodItem {
    /// Create a food item with a fresh identifier
    pub fn new(name: impl Into<String>, amino_acid_profile: FoodAminoProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amino_acid_profile,
        }
    }

    /// Identifier and name only
    #[must_use]
    pub fn summary(&self) -> FoodItemSummary {
        FoodItemSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Identifier and name of a food item, used for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItemSummary {
    /// Unique identifier
    pub id: Uuid,
    /// Food name
    pub name: String,
}

/// Link between a nutrition log and a food item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLogFoodItem {
    /// Link identifier
    pub id: Uuid,
    /// Linked food item
    pub food_item_id: Uuid,
    /// Owning log
    pub nutrition_log_id: Uuid,
}

/// Consumption record for the user
///
/// The most recently created log is the active log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLog {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Linked food items, each at most once
    pub food_items: Vec<NutritionLogFoodItem>,
}
