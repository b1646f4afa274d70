// ABOUTME: Main library entry point for the Aminotrack amino acid coverage server
// ABOUTME: Wires storage, the requirement pipeline, and the REST API together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Aminotrack Server
//!
//! Tracks what a single user eats and how well the amino acids in that food
//! cover their personalized daily requirement.
//!
//! ## Architecture
//!
//! - **`aminotrack-core`**: errors, amino acid tables, and domain records
//! - **`aminotrack-intelligence`**: the pure requirement and coverage pipeline
//! - **Database**: `SQLite` storage for the user, food items, logs, and
//!   requirement constants
//! - **Services**: load pipeline inputs and run the pipeline
//! - **Routes**: axum handlers for the web frontend
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use aminotrack_server::config::environment::ServerConfig;
//! use aminotrack_server::database::Database;
//! use aminotrack_server::resources::ServerResources;
//! use aminotrack_server::routes::build_router;
//! use aminotrack_server::server::run_server;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let database = Database::new(&config.database_url.to_connection_string()).await?;
//!     let resources = Arc::new(ServerResources::new(database, Arc::clone(&config)));
//!
//!     run_server(build_router(resources), config.http_port).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// `SQLite` storage for users, food items, nutrition logs, and requirement constants
pub mod database;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing layers
pub mod middleware;

/// Shared resources handed to route handlers
pub mod resources;

/// HTTP routes
pub mod routes;

/// HTTP server startup and graceful shutdown
pub mod server;

/// Orchestration of storage reads and the requirement pipeline
pub mod services;

pub use aminotrack_core::{constants, errors, models};
