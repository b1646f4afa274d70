// ABOUTME: Amino acid profile service combining storage reads with the requirement pipeline
// ABOUTME: Computes personalized daily needs, consumed sums, and coverage on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database::NutritionDataProvider;
use aminotrack_core::errors::AppResult;
use aminotrack_core::models::AminoAcidTable;
use aminotrack_intelligence::{
    compute_consumed_sums, compute_coverage, compute_daily_needs, ModifierConfig,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Computes the three amino acid views for the single user
///
/// Nothing is cached; every call reads the current profile, constants, and
/// active log through one provider snapshot. Errors from the provider and
/// the pipeline are returned as-is.
pub struct AminoProfileService<P> {
    provider: Arc<P>,
    config: Arc<ModifierConfig>,
}

impl<P> Clone for AminoProfileService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: Arc::clone(&self.config),
        }
    }
}

impl<P: NutritionDataProvider> AminoProfileService<P> {
    /// Create a service over a data provider and modifier rules
    pub const fn new(provider: Arc<P>, config: Arc<ModifierConfig>) -> Self {
        Self { provider, config }
    }

    /// Personalized daily requirement in grams
    ///
    /// # Errors
    ///
    /// - `NoProfile` when no user exists
    /// - `NoRequirementData` when no requirement constants are stored
    #[instrument(skip(self))]
    pub async fn daily_needs(&self) -> AppResult<AminoAcidTable> {
        let snapshot = self.provider.snapshot(false).await?;

        compute_daily_needs(&snapshot.profile, &snapshot.constants, &self.config)
    }

    /// Grams consumed per amino acid across the active log
    ///
    /// Empty when there is no active log or it has no food items.
    ///
    /// # Errors
    ///
    /// Returns a database error when the active log cannot be read
    #[instrument(skip(self))]
    pub async fn consumed_sums(&self) -> AppResult<AminoAcidTable> {
        let items = self.provider.active_log_food_items().await?;
        debug!(food_items = items.len(), "Summing active log consumption");

        Ok(compute_consumed_sums(&items))
    }

    /// Coverage percentage of the personalized requirement
    ///
    /// Empty when either the requirement or the consumption is empty.
    ///
    /// # Errors
    ///
    /// Same as [`Self::daily_needs`], plus database errors reading the log
    #[instrument(skip(self))]
    pub async fn coverage(&self) -> AppResult<AminoAcidTable> {
        let snapshot = self.provider.snapshot(true).await?;
        debug!(
            food_items = snapshot.food_items.len(),
            "Computing coverage for active log"
        );

        compute_coverage(
            &snapshot.profile,
            &snapshot.constants,
            &snapshot.food_items,
            &self.config,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::database::NutritionSnapshot;
    use aminotrack_core::errors::{AppError, ErrorCode};
    use aminotrack_core::models::{
        AminoAcid, FoodAminoProfile, PersonalizationProfile, RequirementConstant,
    };
    use async_trait::async_trait;

    struct StubProvider {
        profile: Option<PersonalizationProfile>,
        constants: Vec<RequirementConstant>,
        items: Vec<FoodAminoProfile>,
    }

    #[async_trait]
    impl NutritionDataProvider for StubProvider {
        async fn requirement_constants(&self) -> AppResult<Vec<RequirementConstant>> {
            Ok(self.constants.clone())
        }

        async fn personalization_profile(&self) -> AppResult<PersonalizationProfile> {
            self.profile.ok_or_else(AppError::no_profile)
        }

        async fn active_log_food_items(&self) -> AppResult<Vec<FoodAminoProfile>> {
            Ok(self.items.clone())
        }
    }

    fn service(provider: StubProvider) -> AminoProfileService<StubProvider> {
        AminoProfileService::new(Arc::new(provider), Arc::new(ModifierConfig::default()))
    }

    fn lysine_only() -> Vec<RequirementConstant> {
        vec![RequirementConstant::new(AminoAcid::Lysine, 30.0)]
    }

    #[tokio::test]
    async fn test_missing_profile_propagates() {
        let svc = service(StubProvider {
            profile: None,
            constants: lysine_only(),
            items: Vec::new(),
        });

        let err = svc.daily_needs().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoProfile);

        let err = svc.coverage().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoProfile);
    }

    #[tokio::test]
    async fn test_empty_constants_fail_daily_needs() {
        let svc = service(StubProvider {
            profile: Some(PersonalizationProfile::with_weight(70.0)),
            constants: Vec::new(),
            items: Vec::new(),
        });

        let err = svc.daily_needs().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoRequirementData);
    }

    #[tokio::test]
    async fn test_coverage_is_empty_without_consumption() {
        let svc = service(StubProvider {
            profile: Some(PersonalizationProfile::with_weight(70.0)),
            constants: lysine_only(),
            items: Vec::new(),
        });

        assert!(svc.consumed_sums().await.unwrap().is_empty());
        assert!(svc.coverage().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_coverage_for_single_amino_acid() {
        let items: Vec<FoodAminoProfile> = [1.0, 0.6]
            .into_iter()
            .map(|grams| [(AminoAcid::Lysine, grams)].into_iter().collect())
            .collect();
        let svc = service(StubProvider {
            profile: Some(PersonalizationProfile::with_weight(70.0)),
            constants: lysine_only(),
            items,
        });

        let coverage = svc.coverage().await.unwrap();
        let lysine = coverage.get(AminoAcid::Lysine).unwrap();
        assert!((lysine - 76.19).abs() < 1e-9);
    }

    /// Only answers whole snapshots; the individual reads always fail
    struct SnapshotOnlyProvider(NutritionSnapshot);

    #[async_trait]
    impl NutritionDataProvider for SnapshotOnlyProvider {
        async fn requirement_constants(&self) -> AppResult<Vec<RequirementConstant>> {
            Err(AppError::internal("constants read outside snapshot"))
        }

        async fn personalization_profile(&self) -> AppResult<PersonalizationProfile> {
            Err(AppError::internal("profile read outside snapshot"))
        }

        async fn active_log_food_items(&self) -> AppResult<Vec<FoodAminoProfile>> {
            Err(AppError::internal("log read outside snapshot"))
        }

        async fn snapshot(&self, with_food_items: bool) -> AppResult<NutritionSnapshot> {
            let mut snapshot = self.0.clone();
            if !with_food_items {
                snapshot.food_items.clear();
            }
            Ok(snapshot)
        }
    }

    #[tokio::test]
    async fn test_needs_and_coverage_come_from_one_snapshot() {
        let svc = AminoProfileService::new(
            Arc::new(SnapshotOnlyProvider(NutritionSnapshot {
                profile: PersonalizationProfile::with_weight(70.0),
                constants: lysine_only(),
                food_items: vec![[(AminoAcid::Lysine, 1.05)].into_iter().collect()],
            })),
            Arc::new(ModifierConfig::default()),
        );

        let needs = svc.daily_needs().await.unwrap();
        assert!((needs.get(AminoAcid::Lysine).unwrap() - 2.1).abs() < 1e-9);

        let coverage = svc.coverage().await.unwrap();
        assert!((coverage.get(AminoAcid::Lysine).unwrap() - 50.0).abs() < 1e-9);
    }
}
