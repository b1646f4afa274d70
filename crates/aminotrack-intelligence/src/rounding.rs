// ABOUTME: Two-decimal rounding used by every requirement modifier and coverage value
// ABOUTME: Rounds half away from zero, which is half-up for the non-negative amounts tracked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use aminotrack_core::constants::units::TWO_DECIMAL_SCALE;
use aminotrack_core::models::AminoAcidTable;

/// Round to two decimal places, `.005` rounds up
#[must_use]
pub fn round_two_decimals(value: f64) -> f64 {
    (value * TWO_DECIMAL_SCALE).round() / TWO_DECIMAL_SCALE
}

/// Copy of `table` with every value rounded to two decimals
#[must_use]
pub fn round_table(table: &AminoAcidTable) -> AminoAcidTable {
    table.map_values(|_, value| round_two_decimals(value))
}
