// ABOUTME: The single user record and the personalization attributes derived from it
// ABOUTME: Weight and diet flags drive which requirement modifiers are applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attributes that personalize the amino acid requirement table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationProfile {
    /// Body weight in kilograms, must be positive
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Applies the athlete modifier
    pub is_athlete: bool,
    /// Applies the vegan modifier
    pub is_vegan: bool,
    /// Applies the longevity modifier
    pub is_longevity_focused: bool,
}

impl PersonalizationProfile {
    /// Profile with the given weight and no modifiers active
    #[must_use]
    pub const fn with_weight(weight_kg: f64) -> Self {
        Self {
            weight_kg,
            is_athlete: false,
            is_vegan: false,
            is_longevity_focused: false,
        }
    }
}

/// The single user of the system
///
/// Exactly one user exists at a time; the storage layer enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Athlete flag
    pub is_athlete: bool,
    /// Vegan flag
    pub is_vegan: bool,
    /// Longevity-focus flag
    pub is_longevity_focused: bool,
}

impl User {
    /// Attributes consumed by the requirement pipeline
    #[must_use]
    pub const fn personalization(&self) -> PersonalizationProfile {
        PersonalizationProfile {
            weight_kg: self.weight_kg,
            is_athlete: self.is_athlete,
            is_vegan: self.is_vegan,
            is_longevity_focused: self.is_longevity_focused,
        }
    }
}
