// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Orchestrates storage reads and the amino acid pipeline for the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! Route handlers stay thin and delegate here. Services load what the pure
//! pipeline needs through [`crate::database::NutritionDataProvider`] and
//! return the pipeline's tables untouched.

/// Daily needs, consumed sums, and coverage for the single user
pub mod amino_profile;

pub use amino_profile::AminoProfileService;
