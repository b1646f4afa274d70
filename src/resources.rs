// ABOUTME: Centralized resource container shared by every route handler
// ABOUTME: Holds the database, the amino acid profile service, and server configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Server Resources
//!
//! Built once at startup and handed to the router behind an `Arc`, so
//! handlers never reconnect to storage or rebuild the modifier rules.

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::services::AminoProfileService;
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Storage for users, food items, logs, and requirement constants
    pub database: Arc<Database>,
    /// Daily needs, consumed sums, and coverage
    pub amino_profile: AminoProfileService<Database>,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire the services to the database and configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let database = Arc::new(database);
        let amino_profile =
            AminoProfileService::new(Arc::clone(&database), Arc::new(config.modifiers.clone()));

        Self {
            database,
            amino_profile,
            config,
        }
    }
}
