// ABOUTME: Amino acid requirement personalization and coverage engine
// ABOUTME: Base requirements, modifier chain, consumption aggregation, and coverage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Aminotrack Intelligence
//!
//! The requirement and coverage pipeline. Every stage takes an
//! [`AminoAcidTable`](aminotrack_core::models::AminoAcidTable) and returns a
//! fresh one; nothing here touches storage.
//!
//! ```text
//! constants + weight ──► requirements ──► modifiers ──► personalized needs ─┐
//!                                                                          ├─► coverage
//! active log foods ─────────────────────► consumption ──► consumed sums ────┘
//! ```

/// Modifier rule configuration and validation
pub mod config;

/// Sum of amino acids across logged food items
pub mod consumption;

/// Consumed amount as a percentage of the personalized requirement
pub mod coverage;

/// Athlete, vegan, and longevity requirement adjustments
pub mod modifiers;

/// Entry points combining the stages
pub mod pipeline;

/// Weight-scaled baseline requirements
pub mod requirements;

/// Two-decimal rounding shared by the stages
pub mod rounding;

pub use config::{ConfigError, ModifierConfig, ModifierRules};
pub use modifiers::{Modifier, ModifierChain};
pub use pipeline::{compute_consumed_sums, compute_coverage, compute_daily_needs};
