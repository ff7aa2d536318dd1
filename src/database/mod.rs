// ABOUTME: Database handle owning the SQLite pool plus schema creation
// ABOUTME: Entry point for every user, tip, reminder and health data operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! [`Database`] is constructed once by the caller and passed to whatever needs it;
//! there is no global connection. Cloning is cheap because the pool is reference
//! counted. Each public operation runs exactly one statement with positionally bound
//! parameters and maps the result into a typed record from [`crate::models`].

mod errors;
mod health_data;
mod reminders;
mod tips;
mod users;

/// Helpers for creating isolated in-memory databases
pub mod test_utils;

pub use errors::{DatabaseError, DatabaseResult};

use crate::config::{DatabaseConfig, DatabaseUrl};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::fs;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Database manager for users, tips, reminders and health data
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url` with default pool settings and create the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or migration fails
    pub async fn new(database_url: &str) -> DatabaseResult<Self> {
        let config =
            DatabaseConfig::for_url(database_url).map_err(|e| DatabaseError::ConfigError {
                context: e.message,
            })?;
        Self::from_config(&config).await
    }

    /// Connect using an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the database directory cannot be created, the connection
    /// fails or, with `auto_migrate`, migration fails
    pub async fn from_config(config: &DatabaseConfig) -> DatabaseResult<Self> {
        // SQLite creates the file but not the directories leading to it
        if let DatabaseUrl::SQLite { path } = &config.url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| DatabaseError::ConfigError {
                    context: format!(
                        "Cannot create database directory {}: {e}",
                        parent.display()
                    ),
                })?;
            }
        }

        // Ensure SQLite creates the database file if it doesn't exist
        let connect_options = SqliteConnectOptions::from_str(&config.url.to_connection_string())?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));

        // Every connection to an in-memory database must stay the same connection,
        // otherwise the data disappears with it
        pool_options = if config.url.is_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(connect_options).await?;
        let db = Self { pool };

        if config.auto_migrate {
            db.migrate().await?;
        }

        info!(database = %config.url, "Database initialized");
        Ok(db)
    }

    /// Wrap an existing pool without running migrations
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables and indexes; safe to run repeatedly
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails
    pub async fn migrate(&self) -> DatabaseResult<()> {
        self.migrate_users().await?;
        self.migrate_tips().await?;
        self.migrate_reminders().await?;
        self.migrate_health_data().await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
