// ABOUTME: Core data models for the Aminotrack amino acid tracker
// ABOUTME: Re-exports amino acid tables, the user profile, food items, and nutrition logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! - `AminoAcid`: one of the 10 tracked amino acids
//! - `AminoAcidTable`: amino acid to amount mapping passed between pipeline stages
//! - `User` / `PersonalizationProfile`: the single user and the attributes the
//!   requirement pipeline reads
//! - `FoodItem`, `NutritionLog`: record-keeping for consumed food

mod amino;
mod food;
mod profile;

pub use amino::{AminoAcid, AminoAcidTable, FoodAminoProfile, RequirementConstant};
pub use food::{FoodItem, FoodItemSummary, NutritionLog, NutritionLogFoodItem};
pub use profile::{PersonalizationProfile, User};
