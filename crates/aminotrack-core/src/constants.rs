// ABOUTME: Application-wide constants for unit conversion, rounding, and validation bounds
// ABOUTME: Shared by the requirement pipeline, storage layer, and HTTP validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants organized by domain

/// Unit conversion factors
pub mod units {
    /// Milligrams per gram (requirement constants are stored in mg/kg)
    pub const MG_PER_GRAM: f64 = 1000.0;

    /// Scale used for two-decimal rounding (`round(value * 100) / 100`)
    pub const TWO_DECIMAL_SCALE: f64 = 100.0;

    /// Multiplier turning a ratio into a percentage
    pub const PERCENT: f64 = 100.0;
}

/// Validation bounds for the user profile form
pub mod profile_limits {
    /// Minimum name length in characters
    pub const NAME_MIN_CHARS: usize = 3;
    /// Maximum name length in characters
    pub const NAME_MAX_CHARS: usize = 15;
    /// Minimum age in years
    pub const AGE_MIN_YEARS: u32 = 18;
    /// Maximum age in years
    pub const AGE_MAX_YEARS: u32 = 120;
    /// Minimum body weight in kilograms
    pub const WEIGHT_MIN_KG: f64 = 36.0;
    /// Maximum body weight in kilograms
    pub const WEIGHT_MAX_KG: f64 = 150.0;
}

/// Service identity used in logs
pub mod service_names {
    /// Default service name for structured logging
    pub const AMINOTRACK_SERVER: &str = "aminotrack-server";
}
