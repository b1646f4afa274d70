// ABOUTME: Scales per-kilogram requirement constants by body weight
// ABOUTME: Produces the unmodified daily requirement table in grams per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use aminotrack_core::constants::units::MG_PER_GRAM;
use aminotrack_core::errors::{AppError, AppResult};
use aminotrack_core::models::{AminoAcidTable, RequirementConstant};
use tracing::debug;

/// Daily requirement in grams: `mg_per_kg * weight_kg / 1000` per amino acid
///
/// Duplicate constants for the same amino acid are summed. Values are left
/// unrounded; rounding happens in the modifier chain.
///
/// # Errors
///
/// - `NoRequirementData` when `constants` is empty
/// - `InvalidInput` when `weight_kg` is not a positive finite number
pub fn calculate_base_requirements(
    constants: &[RequirementConstant],
    weight_kg: f64,
) -> AppResult<AminoAcidTable> {
    if constants.is_empty() {
        return Err(AppError::no_requirement_data());
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of kilograms, got {weight_kg}"
        )));
    }

    let mut base = AminoAcidTable::new();
    for constant in constants {
        base.accumulate(
            constant.amino_acid,
            constant.mg_per_kg * weight_kg / MG_PER_GRAM,
        );
    }

    debug!(weight_kg, amino_acids = base.len(), "Calculated base requirements");
    Ok(base)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aminotrack_core::errors::ErrorCode;
    use aminotrack_core::models::AminoAcid;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_scales_constant_by_weight() {
        let constants = [
            RequirementConstant::new(AminoAcid::Lysine, 30.0),
            RequirementConstant::new(AminoAcid::Leucine, 39.0),
        ];

        let base = calculate_base_requirements(&constants, 70.0).unwrap();

        assert!((base.get_or_zero(AminoAcid::Lysine) - 2.1).abs() < EPSILON);
        assert!((base.get_or_zero(AminoAcid::Leucine) - 2.73).abs() < EPSILON);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_duplicate_constants_are_summed() {
        let constants = [
            RequirementConstant::new(AminoAcid::Glycine, 10.0),
            RequirementConstant::new(AminoAcid::Glycine, 5.0),
        ];

        let base = calculate_base_requirements(&constants, 100.0).unwrap();

        assert!((base.get_or_zero(AminoAcid::Glycine) - 1.5).abs() < EPSILON);
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_empty_constants_is_no_requirement_data() {
        let err = calculate_base_requirements(&[], 70.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoRequirementData);
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        let constants = [RequirementConstant::new(AminoAcid::Lysine, 30.0)];

        for weight in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = calculate_base_requirements(&constants, weight).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }
}
