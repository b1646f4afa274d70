// ABOUTME: Entry points combining requirement, modifier, consumption, and coverage stages
// ABOUTME: Pure functions over already-loaded profile, constants, and food profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ModifierConfig;
use crate::consumption::aggregate_consumption;
use crate::coverage::calculate_coverage;
use crate::modifiers::ModifierChain;
use crate::requirements::calculate_base_requirements;
use aminotrack_core::errors::AppResult;
use aminotrack_core::models::{
    AminoAcidTable, FoodAminoProfile, PersonalizationProfile, RequirementConstant,
};
use tracing::{debug, info};

/// Personalized daily requirement in grams, rounded to two decimals
///
/// # Errors
///
/// - `NoRequirementData` when `constants` is empty
/// - `InvalidInput` when the profile weight is not positive
pub fn compute_daily_needs(
    profile: &PersonalizationProfile,
    constants: &[RequirementConstant],
    config: &ModifierConfig,
) -> AppResult<AminoAcidTable> {
    let base = calculate_base_requirements(constants, profile.weight_kg)?;
    let chain = ModifierChain::for_profile(profile);
    let needs = chain.apply(&base, config)?;

    info!(
        weight_kg = profile.weight_kg,
        modifiers = ?chain.modifiers(),
        "Computed daily amino acid needs"
    );
    debug!(?base, ?needs, "Daily needs before and after modifiers");
    Ok(needs)
}

/// Consumed grams per amino acid across the active log
#[must_use]
pub fn compute_consumed_sums(items: &[FoodAminoProfile]) -> AminoAcidTable {
    aggregate_consumption(items)
}

/// Coverage percentage of the personalized requirement
///
/// Returns an empty table when either the requirement or the consumption is
/// empty, rather than a zero for every amino acid.
///
/// # Errors
///
/// Propagates the errors of [`compute_daily_needs`]
pub fn compute_coverage(
    profile: &PersonalizationProfile,
    constants: &[RequirementConstant],
    items: &[FoodAminoProfile],
    config: &ModifierConfig,
) -> AppResult<AminoAcidTable> {
    let needs = compute_daily_needs(profile, constants, config)?;
    let consumed = compute_consumed_sums(items);

    if needs.is_empty() || consumed.is_empty() {
        debug!(
            needs = needs.len(),
            consumed = consumed.len(),
            "Nothing to compare, returning empty coverage"
        );
        return Ok(AminoAcidTable::new());
    }

    Ok(calculate_coverage(&needs, &consumed))
}
