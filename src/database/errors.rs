// ABOUTME: Structured error types for database operations
// ABOUTME: Separates the duplicate-email conflict from raw storage failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors produced by [`Database`](super::Database) operations
///
/// Absent records are never errors: lookups return `None`, deletes return `false`.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A user with this email already exists
    #[error("Email already in use: {email}")]
    DuplicateEmail {
        /// The conflicting address
        email: String,
    },

    /// A statement failed in the storage layer
    #[error("Database query failed: {context}")]
    QueryError {
        /// Driver message
        context: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Schema creation failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// Which step of the migration failed
        context: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Password hashing or verification could not run
    #[error("Password hashing failed: {context}")]
    PasswordHashError {
        /// Failure description
        context: String,
    },

    /// Connection settings could not be used
    #[error("Invalid database configuration: {context}")]
    ConfigError {
        /// Failure description
        context: String,
    },
}

impl DatabaseError {
    /// Wrap a driver error raised while creating `table`
    pub(crate) fn migration(table: &str, source: sqlx::Error) -> Self {
        Self::MigrationError {
            context: format!("creating {table}: {source}"),
            source,
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(source: sqlx::Error) -> Self {
        Self::QueryError {
            context: source.to_string(),
            source,
        }
    }
}

impl From<bcrypt::BcryptError> for DatabaseError {
    fn from(error: bcrypt::BcryptError) -> Self {
        Self::PasswordHashError {
            context: error.to_string(),
        }
    }
}

/// Result alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
