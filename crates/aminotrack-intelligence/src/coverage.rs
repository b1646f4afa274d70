// ABOUTME: Consumed amount as a percentage of the personalized requirement
// ABOUTME: Zero requirements resolve to zero coverage instead of dividing by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::rounding::round_two_decimals;
use aminotrack_core::constants::units::PERCENT;
use aminotrack_core::models::AminoAcidTable;
use tracing::warn;

/// Coverage percentage for every amino acid in `requirement`
///
/// `round(consumed / need * 100, 2)`, with amino acids missing from
/// `consumed` counted as zero and a non-positive need yielding `0.0`.
#[must_use]
pub fn calculate_coverage(
    requirement: &AminoAcidTable,
    consumed: &AminoAcidTable,
) -> AminoAcidTable {
    requirement.map_values(|amino_acid, need| {
        if need > 0.0 {
            round_two_decimals(consumed.get_or_zero(amino_acid) / need * PERCENT)
        } else {
            warn!(%amino_acid, need, "Requirement is not positive, reporting zero coverage");
            0.0
        }
    })
}
