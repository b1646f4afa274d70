// ABOUTME: Sums amino acid amounts across the food items of the active log
// ABOUTME: Missing profile keys contribute nothing; an empty log sums to an empty table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use aminotrack_core::models::{AminoAcidTable, FoodAminoProfile};
use tracing::debug;

/// Merge-sum every food profile into one consumed table
///
/// Order of `items` does not matter. Sums are not rounded.
#[must_use]
pub fn aggregate_consumption(items: &[FoodAminoProfile]) -> AminoAcidTable {
    let mut consumed = AminoAcidTable::new();
    for profile in items {
        for (amino_acid, amount) in profile.iter() {
            consumed.accumulate(amino_acid, amount);
        }
    }

    debug!(
        food_items = items.len(),
        amino_acids = consumed.len(),
        "Aggregated consumed amino acids"
    );
    consumed
}
