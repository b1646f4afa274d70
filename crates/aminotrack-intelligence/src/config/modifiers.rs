// ABOUTME: Rule tables for the athlete, vegan, and longevity requirement modifiers
// ABOUTME: Per-amino-acid multipliers with defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Modifier Rule Configuration
//!
//! Each modifier is a table of multiplicative adjustments. The defaults
//! encode the published adjustment table:
//!
//! | Modifier  | Amino acids                                | Multiplier |
//! |-----------|--------------------------------------------|------------|
//! | Athlete   | Leucine, Isoleucine, Valine                | 1.30       |
//! | Athlete   | everything else                            | 1.15       |
//! | Vegan     | Lysine                                     | 1.25       |
//! | Vegan     | Methionine, Phenylalanine, Glycine         | 1.20       |
//! | Vegan     | Tryptophan, Threonine                      | 1.15       |
//! | Vegan     | Leucine, Histidine, Valine                 | 1.10       |
//! | Vegan     | Isoleucine                                 | 1.05       |
//! | Longevity | Methionine                                 | 0.80       |
//! | Longevity | Threonine                                  | 0.95       |
//! | Longevity | Tryptophan                                 | 1.10       |
//! | Longevity | Lysine                                     | 1.05       |
//! | Longevity | Leucine, Isoleucine, Valine                | 0.90       |
//! | Longevity | Phenylalanine                              | 1.20       |
//! | Longevity | Glycine                                    | 1.25       |

use super::error::ConfigError;
use aminotrack_core::models::AminoAcid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multipliers for one modifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierRules {
    /// Multiplier per listed amino acid
    pub adjustments: BTreeMap<AminoAcid, f64>,
    /// Multiplier for present amino acids not listed in `adjustments`.
    /// `None` leaves them unchanged.
    pub default_multiplier: Option<f64>,
    /// Insert `0.0` for listed amino acids missing from the input table
    /// before scaling, instead of skipping them
    pub absent_as_zero: bool,
}

impl ModifierRules {
    /// Multiplier for an amino acid, if this rule set touches it
    #[must_use]
    pub fn multiplier_for(&self, amino_acid: AminoAcid) -> Option<f64> {
        self.adjustments
            .get(&amino_acid)
            .copied()
            .or(self.default_multiplier)
    }

    /// Athlete defaults: BCAAs ×1.30, everything else ×1.15
    #[must_use]
    pub fn athlete() -> Self {
        Self {
            adjustments: AminoAcid::BCAAS.into_iter().map(|aa| (aa, 1.30)).collect(),
            default_multiplier: Some(1.15),
            absent_as_zero: false,
        }
    }

    /// Vegan defaults
    #[must_use]
    pub fn vegan() -> Self {
        Self {
            adjustments: BTreeMap::from([
                (AminoAcid::Lysine, 1.25),
                (AminoAcid::Methionine, 1.20),
                (AminoAcid::Tryptophan, 1.15),
                (AminoAcid::Threonine, 1.15),
                (AminoAcid::Leucine, 1.10),
                (AminoAcid::Histidine, 1.10),
                (AminoAcid::Isoleucine, 1.05),
                (AminoAcid::Valine, 1.10),
                (AminoAcid::Phenylalanine, 1.20),
                (AminoAcid::Glycine, 1.20),
            ]),
            default_multiplier: None,
            absent_as_zero: true,
        }
    }

    /// Longevity defaults
    #[must_use]
    pub fn longevity() -> Self {
        Self {
            adjustments: BTreeMap::from([
                (AminoAcid::Methionine, 0.80),
                (AminoAcid::Threonine, 0.95),
                (AminoAcid::Tryptophan, 1.10),
                (AminoAcid::Lysine, 1.05),
                (AminoAcid::Leucine, 0.90),
                (AminoAcid::Isoleucine, 0.90),
                (AminoAcid::Valine, 0.90),
                (AminoAcid::Phenylalanine, 1.20),
                (AminoAcid::Glycine, 1.25),
            ]),
            default_multiplier: None,
            absent_as_zero: false,
        }
    }

    /// Validate every multiplier is finite and positive
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending multiplier
    pub fn validate(&self, rule_set: &'static str) -> Result<(), ConfigError> {
        if self.adjustments.is_empty() && self.default_multiplier.is_none() {
            return Err(ConfigError::EmptyRuleSet(rule_set));
        }

        if let Some((&amino_acid, &value)) = self
            .adjustments
            .iter()
            .find(|(_, value)| !is_valid_multiplier(**value))
        {
            return Err(ConfigError::InvalidMultiplier {
                rule_set,
                amino_acid,
                value,
            });
        }

        match self.default_multiplier {
            Some(value) if !is_valid_multiplier(value) => {
                Err(ConfigError::InvalidDefaultMultiplier { rule_set, value })
            }
            _ => Ok(()),
        }
    }
}

/// Rule tables for all three modifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierConfig {
    /// Applied when the profile is flagged as an athlete
    pub athlete: ModifierRules,
    /// Applied when the profile is flagged as vegan
    pub vegan: ModifierRules,
    /// Applied when the profile is flagged as longevity-focused
    pub longevity: ModifierRules,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            athlete: ModifierRules::athlete(),
            vegan: ModifierRules::vegan(),
            longevity: ModifierRules::longevity(),
        }
    }
}

impl ModifierConfig {
    /// Validate all three rule sets
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking athlete, vegan, then longevity
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.athlete.validate("athlete")?;
        self.vegan.validate("vegan")?;
        self.longevity.validate("longevity")
    }
}

fn is_valid_multiplier(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ModifierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_athlete_falls_back_to_default_multiplier() {
        let rules = ModifierRules::athlete();

        assert_eq!(rules.multiplier_for(AminoAcid::Leucine), Some(1.30));
        assert_eq!(rules.multiplier_for(AminoAcid::Glycine), Some(1.15));
    }

    #[test]
    fn test_longevity_leaves_histidine_untouched() {
        assert_eq!(
            ModifierRules::longevity().multiplier_for(AminoAcid::Histidine),
            None
        );
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let mut config = ModifierConfig::default();
        config.vegan.adjustments.insert(AminoAcid::Lysine, 0.0);

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidMultiplier {
                rule_set: "vegan",
                amino_acid: AminoAcid::Lysine,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_nan_default_multiplier() {
        let mut config = ModifierConfig::default();
        config.athlete.default_multiplier = Some(f64::NAN);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDefaultMultiplier { rule_set: "athlete", .. })
        ));
    }

    #[test]
    fn test_rejects_empty_rule_set() {
        let mut config = ModifierConfig::default();
        config.longevity.adjustments.clear();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRuleSet("longevity"))
        ));
    }
}
