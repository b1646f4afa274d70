// ABOUTME: Single-user profile database operations
// ABOUTME: Enforces that at most one user exists and exposes its personalization attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{format_timestamp, parse_uuid, Database};
use aminotrack_core::errors::{AppError, AppResult};
use aminotrack_core::models::{PersonalizationProfile, User};
use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite};
use tracing::info;
use uuid::Uuid;

/// New values for the existing user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: Option<u32>,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Athlete flag
    pub is_athlete: bool,
    /// Vegan flag
    pub is_vegan: bool,
    /// Longevity-focus flag
    pub is_longevity_focused: bool,
}

impl Database {
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS app_user (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER,
                weight_kg REAL NOT NULL CHECK (weight_kg > 0),
                is_athlete BOOLEAN NOT NULL DEFAULT 0,
                is_vegan BOOLEAN NOT NULL DEFAULT 0,
                is_longevity_focused BOOLEAN NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create the user
    ///
    /// # Errors
    ///
    /// - `ResourceAlreadyExists` if a user already exists
    /// - `DatabaseError` if the insert fails
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_user")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to count users: {e}")))?;
        if existing > 0 {
            return Err(AppError::already_exists(
                "A user already exists; only one user is supported",
            ));
        }

        let now = format_timestamp(Utc::now());
        sqlx::query(
            r"
            INSERT INTO app_user (
                id, name, age, weight_kg, is_athlete, is_vegan, is_longevity_focused,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(user.age.map(i64::from))
        .bind(user.weight_kg)
        .bind(user.is_athlete)
        .bind(user.is_vegan)
        .bind(user.is_longevity_focused)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;

        info!(user_id = %user.id, "Created user");
        Ok(user.id)
    }

    /// Get the user, if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user(&self) -> AppResult<Option<User>> {
        fetch_user(&self.pool).await
    }

    /// Replace the existing user's profile values
    ///
    /// # Errors
    ///
    /// - `NoProfile` if no user exists
    /// - `DatabaseError` if the update fails
    pub async fn update_user(&self, update: &UserUpdate) -> AppResult<User> {
        let existing = self.get_user().await?.ok_or_else(AppError::no_profile)?;

        info!(
            user_id = %existing.id,
            previous_weight_kg = existing.weight_kg,
            weight_kg = update.weight_kg,
            is_athlete = update.is_athlete,
            is_vegan = update.is_vegan,
            is_longevity_focused = update.is_longevity_focused,
            "Updating user profile"
        );

        sqlx::query(
            r"
            UPDATE app_user SET
                name = $2,
                age = $3,
                weight_kg = $4,
                is_athlete = $5,
                is_vegan = $6,
                is_longevity_focused = $7,
                updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(existing.id.to_string())
        .bind(&update.name)
        .bind(update.age.map(i64::from))
        .bind(update.weight_kg)
        .bind(update.is_athlete)
        .bind(update.is_vegan)
        .bind(update.is_longevity_focused)
        .bind(format_timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update user: {e}")))?;

        Ok(User {
            id: existing.id,
            name: update.name.clone(),
            age: update.age,
            weight_kg: update.weight_kg,
            is_athlete: update.is_athlete,
            is_vegan: update.is_vegan,
            is_longevity_focused: update.is_longevity_focused,
        })
    }

    /// Personalization attributes of the user
    ///
    /// # Errors
    ///
    /// - `NoProfile` if no user exists
    /// - `DatabaseError` if the query fails
    pub async fn get_personalization_profile(&self) -> AppResult<PersonalizationProfile> {
        self.get_user()
            .await?
            .as_ref()
            .map(User::personalization)
            .ok_or_else(AppError::no_profile)
    }
}

/// The first (and only) user
pub(super) async fn fetch_user<'e, E>(executor: E) -> AppResult<Option<User>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(
        r"
        SELECT id, name, age, weight_kg, is_athlete, is_vegan, is_longevity_focused
        FROM app_user
        ORDER BY created_at, rowid
        LIMIT 1
        ",
    )
    .fetch_optional(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

    row.as_ref().map(row_to_user).transpose()
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let id: String = row.get("id");
    let age: Option<i64> = row.get("age");

    Ok(User {
        id: parse_uuid(&id)?,
        name: row.get("name"),
        age: age.and_then(|a| u32::try_from(a).ok()),
        weight_kg: row.get("weight_kg"),
        is_athlete: row.get("is_athlete"),
        is_vegan: row.get("is_vegan"),
        is_longevity_focused: row.get("is_longevity_focused"),
    })
}
