// ABOUTME: Configuration for the requirement modifier pipeline
// ABOUTME: Rule tables for the athlete, vegan, and longevity adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Configuration validation errors
pub mod error;

/// Modifier rule tables
pub mod modifiers;

pub use error::ConfigError;
pub use modifiers::{ModifierConfig, ModifierRules};
