// ABOUTME: Database management for users, food items, nutrition logs, and requirement constants
// ABOUTME: Opens the SQLite pool, runs migrations, and shares timestamp helpers
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! `SQLite` storage for the single user, the requirement constants, food items
//! with their amino acid profiles, and nutrition logs.

mod food_items;
mod nutrition_logs;
mod provider;
mod requirements;
mod users;

/// Demo data for local development
pub mod seed;

pub use provider::{NutritionDataProvider, NutritionSnapshot};
pub use users::UserUpdate;

use crate::config::environment::DatabaseUrl;
use aminotrack_core::errors::{AppError, AppResult};
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

/// Connections kept for a file-backed database
const FILE_POOL_CONNECTIONS: u32 = 5;

/// Database manager for users, food items, logs, and requirement constants
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// File databases are created (with their parent directory) if missing.
    /// `sqlite::memory:` uses a single connection so every query sees the
    /// same in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        let url = DatabaseUrl::parse_url(database_url)?;

        let (connection_string, max_connections) = match &url {
            DatabaseUrl::Memory => (url.to_connection_string(), 1),
            DatabaseUrl::SQLite { path } => {
                ensure_parent_dir(path).await?;
                (
                    format!("{}?mode=rwc", url.to_connection_string()),
                    FILE_POOL_CONNECTIONS,
                )
            }
        };

        let mut options = SqlitePoolOptions::new().max_connections(max_connections);
        if url.is_memory() {
            // Dropping the only connection discards the in-memory database
            options = options.idle_timeout(None).max_lifetime(None);
        }
        let pool = options.connect(&connection_string).await?;

        let db = Self { pool };
        db.migrate().await?;

        info!("Database ready at {url}");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_requirements().await?;
        self.migrate_food_items().await?;
        self.migrate_nutrition_logs().await?;
        Ok(())
    }
}

async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}

/// Timestamp format stored in `TEXT` columns; fixed width so text order is time order
fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid stored timestamp {value}: {e}")))
}

fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::database(format!("Invalid stored identifier {value}: {e}")))
}
