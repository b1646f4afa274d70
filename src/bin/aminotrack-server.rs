// ABOUTME: Server binary for the Aminotrack amino acid coverage API
// ABOUTME: Loads configuration, prepares the database, and serves the REST routes
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Aminotrack Server Binary
//!
//! Starts the REST API used by the web frontend. Configuration comes from
//! environment variables; the flags below override individual values.

use aminotrack_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::{seed, Database},
    logging,
    resources::ServerResources,
    routes::build_router,
    server::run_server,
};
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "aminotrack-server")]
#[command(about = "Aminotrack - amino acid requirement and coverage tracker")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (for example `sqlite:./data/aminotrack.db`)
    #[arg(long)]
    database_url: Option<String>,

    /// Seed demo data when the database has no user
    #[arg(long)]
    seed_demo_data: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database_url = DatabaseUrl::parse_url(database_url)?;
    }
    config.seed_demo_data |= args.seed_demo_data;

    logging::init_from_env()?;

    info!("Starting Aminotrack server");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database_url);

    if config.seed_demo_data {
        match seed::seed_demo_data(&database).await? {
            Some(summary) => info!(
                user_id = %summary.user_id,
                food_items = summary.food_items,
                "Seeded demo data"
            ),
            None => info!("Demo data already present, nothing to seed"),
        }
    }

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    let router = build_router(resources);

    display_available_endpoints(port);

    if let Err(e) = run_server(router, port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Health Check:      GET  http://localhost:{port}/health");
    info!("   Daily Needs:       GET  http://localhost:{port}/amino-profile/daily-needs");
    info!("   Consumed Sums:     POST http://localhost:{port}/amino-profile/sum");
    info!("   Coverage:          POST http://localhost:{port}/amino-profile/coverage");
    info!("   Food Items:        GET  http://localhost:{port}/food-items/all");
    info!("   Latest Log:        GET  http://localhost:{port}/nutrition-logs/latest");
    info!("   Current User:      GET  http://localhost:{port}/user-data/current");
    info!("=== End of Endpoint List ===");
}
