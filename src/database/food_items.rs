// ABOUTME: Food item database operations
// ABOUTME: Stores food items with one amount row per amino acid in their profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{format_timestamp, parse_uuid, Database};
use aminotrack_core::errors::{AppError, AppResult};
use aminotrack_core::models::{AminoAcid, FoodAminoProfile, FoodItem, FoodItemSummary};
use anyhow::Result;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite};
use tracing::debug;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_food_items(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS food_items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS food_item_amino_acids (
                food_item_id TEXT NOT NULL REFERENCES food_items(id) ON DELETE CASCADE,
                amino_acid TEXT NOT NULL,
                amount REAL NOT NULL CHECK (amount >= 0),
                PRIMARY KEY (food_item_id, amino_acid)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a food item together with its amino acid profile
    ///
    /// # Errors
    ///
    /// Returns an error if the food item id already exists or a write fails
    pub async fn save_food_item(&self, food_item: &FoodItem) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("INSERT INTO food_items (id, name, created_at) VALUES ($1, $2, $3)")
            .bind(food_item.id.to_string())
            .bind(&food_item.name)
            .bind(format_timestamp(Utc::now()))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to save food item: {e}")))?;

        for (amino_acid, amount) in food_item.amino_acid_profile.iter() {
            sqlx::query(
                r"
                INSERT INTO food_item_amino_acids (food_item_id, amino_acid, amount)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(food_item.id.to_string())
            .bind(amino_acid.name())
            .bind(amount)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to save food amino acid: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;

        debug!(food_item_id = %food_item.id, name = %food_item.name, "Saved food item");
        Ok(())
    }

    /// Identifier and name of every food item, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_food_items(&self) -> AppResult<Vec<FoodItemSummary>> {
        let rows = sqlx::query("SELECT id, name FROM food_items ORDER BY created_at, rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list food items: {e}")))?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                Ok(FoodItemSummary {
                    id: parse_uuid(&id)?,
                    name: row.get("name"),
                })
            })
            .collect()
    }

    /// Food item with its full amino acid profile
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn get_food_item(&self, id: Uuid) -> AppResult<Option<FoodItem>> {
        let row = sqlx::query("SELECT id, name FROM food_items WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get food item: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let amino_acid_profile = fetch_food_profile(&self.pool, id).await?;
        Ok(Some(FoodItem {
            id,
            name: row.get("name"),
            amino_acid_profile,
        }))
    }

    /// Whether a food item with this id exists
    pub(super) async fn food_item_exists(&self, id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM food_items WHERE id = $1")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up food item: {e}")))?;

        Ok(count > 0)
    }
}

/// Amino acid profile of one food item
async fn fetch_food_profile<'e, E>(executor: E, food_item_id: Uuid) -> AppResult<FoodAminoProfile>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        r"
        SELECT amino_acid, amount
        FROM food_item_amino_acids
        WHERE food_item_id = $1
        ",
    )
    .bind(food_item_id.to_string())
    .fetch_all(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to get food amino acids: {e}")))?;

    rows.iter().map(row_to_amount).collect()
}

/// Decode an `(amino_acid, amount)` row
fn row_to_amount(row: &SqliteRow) -> AppResult<(AminoAcid, f64)> {
    let name: String = row.get("amino_acid");
    let amino_acid = name
        .parse::<AminoAcid>()
        .map_err(|e| AppError::database(format!("Invalid stored food profile: {}", e.message)))?;
    Ok((amino_acid, row.get("amount")))
}
