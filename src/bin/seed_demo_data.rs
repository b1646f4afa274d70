// ABOUTME: Demo data seeder for local development of the Aminotrack frontend
// ABOUTME: Creates the demo user, plant foods, an empty log, and the requirement constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Demo data seeder for the Aminotrack server.
//!
//! Usage:
//! ```bash
//! # Seed the database from DATABASE_URL (or the default file)
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific database
//! cargo run --bin seed-demo-data -- --database-url sqlite:./data/dev.db
//!
//! # Verbose output
//! cargo run --bin seed-demo-data -- -v
//! ```

use aminotrack_server::config::environment::defaults;
use aminotrack_server::database::{seed, Database};
use anyhow::Result;
use clap::Parser;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Aminotrack Demo Data Seeder",
    long_about = "Populate an empty database with a demo user, foods, and requirement constants"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Aminotrack Demo Data Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;

    match seed::seed_demo_data(&database).await? {
        Some(summary) => {
            info!("Demo user:             {}", summary.user_id);
            info!("Nutrition log:         {}", summary.log_id);
            info!("Food items written:    {}", summary.food_items);
            info!("Constants written:     {}", summary.requirement_constants);
            info!("=== Seeding complete ===");
        }
        None => info!("Demo data already present, nothing to seed"),
    }

    Ok(())
}
