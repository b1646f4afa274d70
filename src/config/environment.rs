// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management

use aminotrack_intelligence::ModifierConfig;
use anyhow::{Context, Result};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Default values used when a variable is unset
pub mod defaults {
    /// HTTP listen port
    pub const HTTP_PORT: u16 = 8080;
    /// `SQLite` database file
    pub const DATABASE_URL: &str = "sqlite:./data/aminotrack.db";
    /// Origin of the bundled web frontend dev server
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173";
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe `SQLite` location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a `sqlite:` URL
    pub fn parse_url(s: &str) -> Result<Self> {
        let path_str = s
            .strip_prefix("sqlite:")
            .with_context(|| format!("Unsupported database URL (expected sqlite:): {s}"))?;

        if path_str == ":memory:" {
            return Ok(Self::Memory);
        }

        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        Ok(Self::SQLite {
            path: PathBuf::from(path_str),
        })
    }

    /// Connection string for sqlx
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Whether this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/aminotrack.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Cross-origin settings for the web frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins, or `["*"]` for any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether the list contains the `*` wildcard
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Validate the origin list
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or an origin is not a valid
    /// header value
    pub fn validate(&self) -> Result<()> {
        if self.allows_any_origin() {
            return Ok(());
        }
        if self.allowed_origins.is_empty() {
            anyhow::bail!("CORS_ALLOWED_ORIGINS must name at least one origin or be \"*\"");
        }
        for origin in &self.allowed_origins {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin {origin:?}"))?;
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database location
    pub database_url: DatabaseUrl,
    /// CORS settings
    pub cors: CorsConfig,
    /// Seed demo data on startup when the database is empty
    pub seed_demo_data: bool,
    /// Deployment environment
    pub environment: Environment,
    /// Requirement modifier rules
    pub modifiers: ModifierConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            database_url: DatabaseUrl::default(),
            cors: CorsConfig {
                allowed_origins: parse_origins(defaults::CORS_ALLOWED_ORIGINS),
            },
            seed_demo_data: false,
            environment: Environment::Development,
            modifiers: ModifierConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            database_url: DatabaseUrl::parse_url(&env_var_or(
                "DATABASE_URL",
                defaults::DATABASE_URL,
            ))?,
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    "CORS_ALLOWED_ORIGINS",
                    defaults::CORS_ALLOWED_ORIGINS,
                )),
            },
            seed_demo_data: parse_bool(&env_var_or("SEED_DEMO_DATA", "false"))
                .context("Invalid SEED_DEMO_DATA value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            modifiers: ModifierConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero, the CORS origins are unusable,
    /// or the modifier rules are invalid
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            anyhow::bail!("HTTP_PORT must be non-zero");
        }
        self.cors.validate()?;
        self.modifiers
            .validate()
            .context("Invalid requirement modifier rules")?;
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Aminotrack Server Configuration:\n\
             - HTTP Port: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Seed Demo Data: {}\n\
             - Environment: {}",
            self.http_port,
            self.database_url,
            self.cors.allowed_origins.join(", "),
            self.seed_demo_data,
            self.environment,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other}"),
    }
}
