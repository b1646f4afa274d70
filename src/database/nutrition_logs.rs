// ABOUTME: Nutrition log database operations
// ABOUTME: Creates the user's log, links food items to it, and reads the active log's profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{format_timestamp, parse_timestamp, parse_uuid, Database};
use aminotrack_core::errors::{AppError, AppResult};
use aminotrack_core::models::{AminoAcid, FoodAminoProfile, NutritionLog, NutritionLogFoodItem};
use anyhow::Result;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Executor, Row, Sqlite};
use tracing::{debug, info, warn};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_nutrition_logs(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES app_user(id) ON DELETE CASCADE,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_log_food_items (
                id TEXT PRIMARY KEY,
                nutrition_log_id TEXT NOT NULL REFERENCES nutrition_logs(id) ON DELETE CASCADE,
                food_item_id TEXT NOT NULL REFERENCES food_items(id) ON DELETE CASCADE,
                UNIQUE (nutrition_log_id, food_item_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_logs_created_at ON nutrition_logs(created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create an empty log for the user, replacing any log the user already has
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the user does not exist
    /// - `DatabaseError` if a write fails
    pub async fn create_log_for_user(&self, user_id: Uuid) -> AppResult<NutritionLog> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_user WHERE id = $1")
            .bind(user_id.to_string())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up user: {e}")))?;
        if user_count == 0 {
            return Err(AppError::not_found(format!("User {user_id}")));
        }

        sqlx::query(
            r"
            DELETE FROM nutrition_log_food_items
            WHERE nutrition_log_id IN (SELECT id FROM nutrition_logs WHERE user_id = $1)
            ",
        )
        .bind(user_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete log food items: {e}")))?;

        let replaced = sqlx::query("DELETE FROM nutrition_logs WHERE user_id = $1")
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete nutrition logs: {e}")))?
            .rows_affected();

        let log = NutritionLog {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            food_items: Vec::new(),
        };

        sqlx::query("INSERT INTO nutrition_logs (id, user_id, created_at) VALUES ($1, $2, $3)")
            .bind(log.id.to_string())
            .bind(user_id.to_string())
            .bind(format_timestamp(log.created_at))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to create nutrition log: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;

        info!(log_id = %log.id, %user_id, replaced, "Created nutrition log");
        Ok(log)
    }

    /// Log with its food item links
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn get_log(&self, id: Uuid) -> AppResult<Option<NutritionLog>> {
        let row = sqlx::query("SELECT id, user_id, created_at FROM nutrition_logs WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get nutrition log: {e}")))?;

        match row {
            Some(row) => self.hydrate_log(&row).await.map(Some),
            None => Ok(None),
        }
    }

    /// The active log: the most recently created one
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn get_latest_log(&self) -> AppResult<Option<NutritionLog>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, created_at
            FROM nutrition_logs
            ORDER BY created_at DESC, rowid DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get latest nutrition log: {e}")))?;

        match row {
            Some(row) => self.hydrate_log(&row).await.map(Some),
            None => Ok(None),
        }
    }

    /// Link a food item to a log
    ///
    /// Returns `false` without changing anything when the food item is
    /// already in the log.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the log or the food item does not exist
    /// - `DatabaseError` if the write fails
    pub async fn add_food_item_to_log(&self, log_id: Uuid, food_item_id: Uuid) -> AppResult<bool> {
        let log_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM nutrition_logs WHERE id = $1")
            .bind(log_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up nutrition log: {e}")))?;
        if log_count == 0 {
            return Err(AppError::not_found(format!("Nutrition log {log_id}")));
        }
        if !self.food_item_exists(food_item_id).await? {
            return Err(AppError::not_found(format!("Food item {food_item_id}")));
        }

        let inserted = sqlx::query(
            r"
            INSERT INTO nutrition_log_food_items (id, nutrition_log_id, food_item_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (nutrition_log_id, food_item_id) DO NOTHING
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(log_id.to_string())
        .bind(food_item_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add food item to log: {e}")))?
        .rows_affected();

        if inserted == 0 {
            warn!(%log_id, %food_item_id, "Food item already in nutrition log, not added again");
            return Ok(false);
        }

        debug!(%log_id, %food_item_id, "Added food item to nutrition log");
        Ok(true)
    }

    /// Amino acid profiles of every food item in the active log
    ///
    /// Reads the active log and its items in one transaction. Empty when no
    /// log exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn get_active_log_food_items(&self) -> AppResult<Vec<FoodAminoProfile>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let profiles = fetch_active_log_food_items(&mut *tx).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;

        Ok(profiles)
    }

    async fn hydrate_log(&self, row: &SqliteRow) -> AppResult<NutritionLog> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        let created_at: String = row.get("created_at");
        let id = parse_uuid(&id)?;

        Ok(NutritionLog {
            id,
            user_id: parse_uuid(&user_id)?,
            created_at: parse_timestamp(&created_at)?,
            food_items: fetch_log_links(&self.pool, id).await?,
        })
    }
}

async fn fetch_log_links<'e, E>(executor: E, log_id: Uuid) -> AppResult<Vec<NutritionLogFoodItem>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        r"
        SELECT id, food_item_id
        FROM nutrition_log_food_items
        WHERE nutrition_log_id = $1
        ORDER BY rowid
        ",
    )
    .bind(log_id.to_string())
    .fetch_all(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to get log food items: {e}")))?;

    rows.iter()
        .map(|row| {
            let id: String = row.get("id");
            let food_item_id: String = row.get("food_item_id");
            Ok(NutritionLogFoodItem {
                id: parse_uuid(&id)?,
                food_item_id: parse_uuid(&food_item_id)?,
                nutrition_log_id: log_id,
            })
        })
        .collect()
}

/// Food profiles of the most recently created log, empty when there is none
pub(super) async fn fetch_active_log_food_items(
    conn: &mut SqliteConnection,
) -> AppResult<Vec<FoodAminoProfile>> {
    let log_id: Option<String> = sqlx::query_scalar(
        "SELECT id FROM nutrition_logs ORDER BY created_at DESC, rowid DESC LIMIT 1",
    )
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| AppError::database(format!("Failed to get active log: {e}")))?;

    let Some(log_id) = log_id else {
        debug!("No active nutrition log, nothing consumed");
        return Ok(Vec::new());
    };

    let rows = sqlx::query(
        r"
        SELECT li.food_item_id, fa.amino_acid, fa.amount
        FROM nutrition_log_food_items li
        LEFT JOIN food_item_amino_acids fa ON fa.food_item_id = li.food_item_id
        WHERE li.nutrition_log_id = $1
        ORDER BY li.rowid
        ",
    )
    .bind(&log_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| AppError::database(format!("Failed to get active log food items: {e}")))?;

    let profiles = group_profiles(&rows)?;
    debug!(%log_id, food_items = profiles.len(), "Loaded active log food items");
    Ok(profiles)
}

/// Fold joined `(food_item_id, amino_acid, amount)` rows into one profile per food item
fn group_profiles(rows: &[SqliteRow]) -> AppResult<Vec<FoodAminoProfile>> {
    let mut profiles: Vec<(String, FoodAminoProfile)> = Vec::new();

    for row in rows {
        let food_item_id: String = row.get("food_item_id");
        let amino_acid: Option<String> = row.get("amino_acid");
        let amount: Option<f64> = row.get("amount");

        if !profiles.last().is_some_and(|(id, _)| *id == food_item_id) {
            profiles.push((food_item_id, FoodAminoProfile::new()));
        }

        if let (Some(name), Some(amount), Some((_, profile))) =
            (amino_acid, amount, profiles.last_mut())
        {
            let amino_acid = name.parse::<AminoAcid>().map_err(|e| {
                AppError::database(format!("Invalid stored food profile: {}", e.message))
            })?;
            profile.insert(amino_acid, amount);
        }
    }

    Ok(profiles.into_iter().map(|(_, profile)| profile).collect())
}
