// ABOUTME: Database configuration types for SQLite connections
// ABOUTME: Parses connection URLs and loads pool settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_vars, limits};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or names an unsupported backend
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config_invalid("Database URL is empty"));
        }

        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            return Err(AppError::config_invalid(
                "Only SQLite database URLs are supported",
            ));
        }

        if let Some(rest) = s.strip_prefix("sqlite:") {
            // Accept both `sqlite:path` and `sqlite://path`
            let path_str = rest.strip_prefix("//").unwrap_or(rest);
            // Connection flags are set by the pool, not carried in the path
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            return if path_str == ":memory:" {
                Ok(Self::Memory)
            } else if path_str.is_empty() {
                Err(AppError::config_invalid("SQLite database path is empty"))
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            };
        }

        if s == ":memory:" {
            return Ok(Self::Memory);
        }

        // Fallback: treat as SQLite file path
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DATABASE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DATABASE_URL),
            ),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

impl FromStr for DatabaseUrl {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_url(s)
    }
}

/// Database connection and pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Create tables and indexes on connect
    pub auto_migrate: bool,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            auto_migrate: true,
            max_connections: limits::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: limits::DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for the given URL with default pool settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed
    pub fn for_url(url: &str) -> AppResult<Self> {
        Ok(Self {
            url: DatabaseUrl::parse_url(url)?,
            ..Self::default()
        })
    }

    /// Load database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if database environment variables are invalid
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let url = match env::var(env_vars::DATABASE_URL) {
            Ok(value) => DatabaseUrl::parse_url(&value)?,
            Err(_) => defaults.url,
        };

        Ok(Self {
            url,
            auto_migrate: parse_env(env_vars::DATABASE_AUTO_MIGRATE, defaults.auto_migrate)?,
            max_connections: parse_env(
                env_vars::DATABASE_MAX_CONNECTIONS,
                defaults.max_connections,
            )?,
            acquire_timeout_secs: parse_env(
                env_vars::DATABASE_ACQUIRE_TIMEOUT_SECS,
                defaults.acquire_timeout_secs,
            )?,
        })
    }
}

/// Read and parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("{key}={raw:?}: {e}"))),
        Err(_) => Ok(default),
    }
}
