// ABOUTME: Conditional chain of athlete, vegan, and longevity requirement modifiers
// ABOUTME: Each active modifier scales the previous table and rounds it to two decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Requirement Modifier Chain
//!
//! A modifier is selected when its flag on the [`PersonalizationProfile`] is
//! set. Selected modifiers always run in [`Modifier::ORDER`], each receiving
//! the output of the previous one:
//!
//! ```text
//! adjusted = longevity(vegan(athlete(base)))
//! ```
//!
//! Every modifier rounds its whole output table, including amino acids it did
//! not touch. The chain rounds the base table itself when no modifier is
//! active, so its output is always at two decimals.

use crate::config::{ModifierConfig, ModifierRules};
use crate::rounding::round_table;
use aminotrack_core::errors::{AppError, AppResult};
use aminotrack_core::models::{AminoAcidTable, PersonalizationProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A requirement adjustment selected by a profile flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Higher needs from training load
    Athlete,
    /// Compensates for lower plant protein digestibility
    Vegan,
    /// Reduced methionine and BCAAs, more glycine
    Longevity,
}

impl Modifier {
    /// Application order when several modifiers are active
    pub const ORDER: [Self; 3] = [Self::Athlete, Self::Vegan, Self::Longevity];

    /// Whether the profile selects this modifier
    #[must_use]
    pub const fn is_active(self, profile: &PersonalizationProfile) -> bool {
        match self {
            Self::Athlete => profile.is_athlete,
            Self::Vegan => profile.is_vegan,
            Self::Longevity => profile.is_longevity_focused,
        }
    }

    /// Rule table for this modifier
    #[must_use]
    pub const fn rules(self, config: &ModifierConfig) -> &ModifierRules {
        match self {
            Self::Athlete => &config.athlete,
            Self::Vegan => &config.vegan,
            Self::Longevity => &config.longevity,
        }
    }

    /// Apply this modifier to `table`, returning a new rounded table
    #[must_use]
    pub fn apply(self, table: &AminoAcidTable, config: &ModifierConfig) -> AminoAcidTable {
        apply_rules(table, self.rules(config))
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Athlete => f.write_str("athlete"),
            Self::Vegan => f.write_str("vegan"),
            Self::Longevity => f.write_str("longevity"),
        }
    }
}

/// Scale every present amino acid by its multiplier, then round the whole table
///
/// Amino acids without a multiplier pass through unchanged. Listed amino
/// acids absent from `table` are skipped, unless `rules.absent_as_zero` is
/// set, in which case they appear in the output as `0.0`.
#[must_use]
pub fn apply_rules(table: &AminoAcidTable, rules: &ModifierRules) -> AminoAcidTable {
    let mut input = table.clone();
    if rules.absent_as_zero {
        for &amino_acid in rules.adjustments.keys() {
            input.ensure_present(amino_acid);
        }
    }

    let adjusted = input.map_values(|amino_acid, value| {
        rules
            .multiplier_for(amino_acid)
            .map_or(value, |multiplier| value * multiplier)
    });

    round_table(&adjusted)
}

/// Ordered modifiers selected for one profile
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModifierChain {
    modifiers: Vec<Modifier>,
}

impl ModifierChain {
    /// Select the modifiers whose flags are set on `profile`
    #[must_use]
    pub fn for_profile(profile: &PersonalizationProfile) -> Self {
        Self {
            modifiers: Modifier::ORDER
                .into_iter()
                .filter(|modifier| modifier.is_active(profile))
                .collect(),
        }
    }

    /// Selected modifiers in application order
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Whether no modifier is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Run `base` through every selected modifier in order
    ///
    /// # Errors
    ///
    /// Returns `NoRequirementData` when `base` is empty
    pub fn apply(
        &self,
        base: &AminoAcidTable,
        config: &ModifierConfig,
    ) -> AppResult<AminoAcidTable> {
        if base.is_empty() {
            return Err(AppError::no_requirement_data());
        }

        debug!(modifiers = ?self.modifiers, "Applying requirement modifiers");

        let mut current = round_table(base);
        for modifier in &self.modifiers {
            current = modifier.apply(&current, config);
        }
        Ok(current)
    }
}
