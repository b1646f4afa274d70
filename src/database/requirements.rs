// ABOUTME: Amino acid requirement constant database operations
// ABOUTME: Stores one milligram-per-kilogram reference value per amino acid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::Database;
use aminotrack_core::errors::{AppError, AppResult};
use aminotrack_core::models::{AminoAcid, RequirementConstant};
use anyhow::Result;
use sqlx::{Executor, Row, Sqlite};
use tracing::debug;

impl Database {
    pub(super) async fn migrate_requirements(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS amino_acid_requirements (
                amino_acid TEXT PRIMARY KEY,
                base_amount_per_kg REAL NOT NULL CHECK (base_amount_per_kg >= 0)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All requirement constants
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored amino acid name is unknown
    pub async fn get_requirement_constants(&self) -> AppResult<Vec<RequirementConstant>> {
        fetch_requirement_constants(&self.pool).await
    }

    /// Insert or replace requirement constants, keyed by amino acid
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; no constant is written in that case
    pub async fn save_requirement_constants(
        &self,
        constants: &[RequirementConstant],
    ) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        for constant in constants {
            sqlx::query(
                r"
                INSERT INTO amino_acid_requirements (amino_acid, base_amount_per_kg)
                VALUES ($1, $2)
                ON CONFLICT(amino_acid) DO UPDATE SET
                    base_amount_per_kg = excluded.base_amount_per_kg
                ",
            )
            .bind(constant.amino_acid.name())
            .bind(constant.mg_per_kg)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to save requirement constant: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;

        debug!(count = constants.len(), "Saved requirement constants");
        Ok(())
    }

    /// Delete every requirement constant, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn clear_requirement_constants(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM amino_acid_requirements")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to clear requirement constants: {e}"))
            })?;

        Ok(result.rows_affected())
    }
}

pub(super) async fn fetch_requirement_constants<'e, E>(
    executor: E,
) -> AppResult<Vec<RequirementConstant>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        r"
        SELECT amino_acid, base_amount_per_kg
        FROM amino_acid_requirements
        ORDER BY rowid
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to get requirement constants: {e}")))?;

    rows.iter()
        .map(|row| {
            let name: String = row.get("amino_acid");
            let amino_acid = name.parse::<AminoAcid>().map_err(|e| {
                AppError::database(format!("Invalid stored requirement: {}", e.message))
            })?;
            Ok(RequirementConstant::new(
                amino_acid,
                row.get("base_amount_per_kg"),
            ))
        })
        .collect()
}
