// ABOUTME: Core types and constants for the Aminotrack amino acid tracker
// ABOUTME: Foundation crate with error handling, amino acid tables, and domain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Aminotrack Core
//!
//! Foundation crate providing shared types and constants for the Aminotrack
//! amino acid coverage tracker. This crate changes rarely, so the pipeline and
//! server crates can compile against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, rounding scale, and profile validation bounds
//! - **models**: Amino acid identifiers, tables, profiles, food items, and logs

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`AminoAcid`, `AminoAcidTable`, `User`, `FoodItem`, `NutritionLog`)
pub mod models;
