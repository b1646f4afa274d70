// ABOUTME: Amino acid identifiers and the amino acid table passed through every pipeline stage
// ABOUTME: Fixed closed set of 10 amino acids keyed by their stored names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// One of the 10 tracked amino acids
///
/// Serialized with the names used by the stored reference data and food
/// profiles (`"Lysin"`, `"Leucin"`, ...). English names are accepted when
/// deserializing and parsing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AminoAcid {
    /// Lysine
    #[serde(rename = "Lysin", alias = "Lysine")]
    Lysine,
    /// Leucine (branched-chain)
    #[serde(rename = "Leucin", alias = "Leucine")]
    Leucine,
    /// Isoleucine (branched-chain)
    #[serde(rename = "Isoleucin", alias = "Isoleucine")]
    Isoleucine,
    /// Valine (branched-chain)
    #[serde(rename = "Valin", alias = "Valine")]
    Valine,
    /// Methionine
    #[serde(rename = "Methionin", alias = "Methionine")]
    Methionine,
    /// Phenylalanine
    #[serde(rename = "Phenylalanin", alias = "Phenylalanine")]
    Phenylalanine,
    /// Threonine
    #[serde(rename = "Threonin", alias = "Threonine")]
    Threonine,
    /// Tryptophan
    #[serde(rename = "Tryptophan")]
    Tryptophan,
    /// Histidine
    #[serde(rename = "Histidin", alias = "Histidine")]
    Histidine,
    /// Glycine
    #[serde(rename = "Glycin", alias = "Glycine")]
    Glycine,
}

impl AminoAcid {
    /// Every tracked amino acid in declaration order
    pub const ALL: [Self; 10] = [
        Self::Lysine,
        Self::Leucine,
        Self::Isoleucine,
        Self::Valine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Histidine,
        Self::Glycine,
    ];

    /// Branched-chain amino acids
    pub const BCAAS: [Self; 3] = [Self::Leucine, Self::Isoleucine, Self::Valine];

    /// Storage and wire name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lysine => "Lysin",
            Self::Leucine => "Leucin",
            Self::Isoleucine => "Isoleucin",
            Self::Valine => "Valin",
            Self::Methionine => "Methionin",
            Self::Phenylalanine => "Phenylalanin",
            Self::Threonine => "Threonin",
            Self::Tryptophan => "Tryptophan",
            Self::Histidine => "Histidin",
            Self::Glycine => "Glycin",
        }
    }

    /// English name
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Lysine => "Lysine",
            Self::Leucine => "Leucine",
            Self::Isoleucine => "Isoleucine",
            Self::Valine => "Valine",
            Self::Methionine => "Methionine",
            Self::Phenylalanine => "Phenylalanine",
            Self::Threonine => "Threonine",
            Self::Tryptophan => "Tryptophan",
            Self::Histidine => "Histidine",
            Self::Glycine => "Glycine",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AminoAcid {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|aa| {
                aa.name().eq_ignore_ascii_case(trimmed)
                    || aa.english_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| AppError::invalid_input(format!("Unknown amino acid: {trimmed}")))
    }
}

/// Mapping from amino acid to a non-negative amount
///
/// Depending on the pipeline stage the values are grams per day, grams
/// consumed, or coverage percentages. Keys are kept ordered so identical
/// inputs always serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AminoAcidTable(BTreeMap<AminoAcid, f64>);

impl AminoAcidTable {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Value for an amino acid, if present
    #[must_use]
    pub fn get(&self, amino_acid: AminoAcid) -> Option<f64> {
        self.0.get(&amino_acid).copied()
    }

    /// Value for an amino acid, treating a missing key as zero
    #[must_use]
    pub fn get_or_zero(&self, amino_acid: AminoAcid) -> f64 {
        self.get(amino_acid).unwrap_or(0.0)
    }

    /// Whether the amino acid is present as a key
    #[must_use]
    pub fn contains(&self, amino_acid: AminoAcid) -> bool {
        self.0.contains_key(&amino_acid)
    }

    /// Set a value, replacing any previous one
    pub fn insert(&mut self, amino_acid: AminoAcid, value: f64) -> Option<f64> {
        self.0.insert(amino_acid, value)
    }

    /// Add `value` to the current entry, creating it when absent
    pub fn accumulate(&mut self, amino_acid: AminoAcid, value: f64) {
        *self.0.entry(amino_acid).or_insert(0.0) += value;
    }

    /// Insert `0.0` for the amino acid when it is absent
    pub fn ensure_present(&mut self, amino_acid: AminoAcid) {
        self.0.entry(amino_acid).or_insert(0.0);
    }

    /// Number of amino acids present
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no amino acid is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in amino acid order
    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, f64)> + '_ {
        self.0.iter().map(|(aa, value)| (*aa, *value))
    }

    /// Iterate the amino acids present
    pub fn amino_acids(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.0.keys().copied()
    }

    /// New table with `f` applied to every value
    #[must_use]
    pub fn map_values(&self, mut f: impl FnMut(AminoAcid, f64) -> f64) -> Self {
        self.iter().map(|(aa, value)| (aa, f(aa, value))).collect()
    }
}

impl FromIterator<(AminoAcid, f64)> for AminoAcidTable {
    fn from_iter<I: IntoIterator<Item = (AminoAcid, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AminoAcidTable {
    type Item = (AminoAcid, f64);
    type IntoIter = btree_map::IntoIter<AminoAcid, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<BTreeMap<AminoAcid, f64>> for AminoAcidTable {
    fn from(map: BTreeMap<AminoAcid, f64>) -> Self {
        Self(map)
    }
}

/// Reference requirement for one amino acid, in mg per kg bodyweight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementConstant {
    /// Amino acid the constant applies to
    pub amino_acid: AminoAcid,
    /// Milligrams per kilogram of bodyweight per day
    #[serde(rename = "baseAmountPerKg")]
    pub mg_per_kg: f64,
}

impl RequirementConstant {
    /// Create a requirement constant
    #[must_use]
    pub const fn new(amino_acid: AminoAcid, mg_per_kg: f64) -> Self {
        Self {
            amino_acid,
            mg_per_kg,
        }
    }
}

/// Grams of each amino acid per consumed unit of a food item
pub type FoodAminoProfile = AminoAcidTable;
