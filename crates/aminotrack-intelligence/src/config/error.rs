// ABOUTME: Configuration error types for modifier rule validation
// ABOUTME: Defines error variants for invalid multipliers and empty rule sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use aminotrack_core::errors::AppError;
use aminotrack_core::models::AminoAcid;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Multiplier is zero, negative, NaN, or infinite
    #[error("Invalid multiplier {value} for {amino_acid} in {rule_set} rules")]
    InvalidMultiplier {
        /// Rule set the multiplier belongs to
        rule_set: &'static str,
        /// Amino acid the multiplier applies to
        amino_acid: AminoAcid,
        /// Offending value
        value: f64,
    },

    /// Fallback multiplier is zero, negative, NaN, or infinite
    #[error("Invalid default multiplier {value} in {rule_set} rules")]
    InvalidDefaultMultiplier {
        /// Rule set the multiplier belongs to
        rule_set: &'static str,
        /// Offending value
        value: f64,
    },

    /// Rule set neither lists amino acids nor has a fallback multiplier
    #[error("Rule set {0} adjusts nothing")]
    EmptyRuleSet(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
