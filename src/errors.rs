// ABOUTME: Unified application error type with standard error codes and HTTP status mapping
// ABOUTME: Translates database-layer errors into caller-facing codes for an outer API layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError` is what callers above the data layer (an HTTP layer, the seeding binary)
//! work with. Database operations return the narrower
//! [`DatabaseError`](crate::database::DatabaseError); the `From` impl here decides how
//! each storage failure is presented. Absent records and failed credential checks are
//! `None` results, not errors, so no not-found or auth code exists here.

use crate::database::DatabaseError;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Management (4000-4999)
    /// Record conflicts with an existing unique value
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Configuration value is malformed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Storage layer failure
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::ResourceAlreadyExists => 409,
            Self::ConfigInvalid | Self::InternalError | Self::DatabaseError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource conflicts with an existing one
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Malformed configuration value
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::DuplicateEmail { .. } => Self::already_exists("Email already in use"),
            DatabaseError::ConfigError { ref context } => {
                let message = context.clone();
                Self::config_invalid(message).with_source(error)
            }
            DatabaseError::PasswordHashError { .. } => {
                Self::internal("Password processing failed").with_source(error)
            }
            DatabaseError::QueryError { .. } | DatabaseError::MigrationError { .. } => {
                let message = error.to_string();
                Self::database(message).with_source(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
        assert_eq!(ErrorCode::ResourceAlreadyExists.http_status(), 409);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let error = AppError::from(DatabaseError::DuplicateEmail {
            email: "taken@example.com".into(),
        });

        assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
        assert_eq!(error.http_status(), 409);
        // The conflicting address is not echoed back to the caller
        assert!(!error.message.contains("taken@example.com"));
    }

    #[test]
    fn test_query_error_keeps_source() {
        let error = AppError::from(DatabaseError::from(sqlx::Error::RowNotFound));

        assert_eq!(error.code, ErrorCode::DatabaseError);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_every_database_error_has_a_code() {
        let config = AppError::from(DatabaseError::ConfigError {
            context: "bad url".into(),
        });
        assert_eq!(config.code, ErrorCode::ConfigInvalid);
        assert_eq!(config.message, "bad url");

        let hashing = AppError::from(DatabaseError::PasswordHashError {
            context: "cost out of range".into(),
        });
        assert_eq!(hashing.code, ErrorCode::InternalError);
        // Hash failure details stay in the source chain
        assert!(!hashing.message.contains("cost out of range"));

        let migration = AppError::from(DatabaseError::migration("tips", sqlx::Error::PoolClosed));
        assert_eq!(migration.code, ErrorCode::DatabaseError);
        assert!(migration.message.contains("tips"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ResourceAlreadyExists).unwrap();
        assert_eq!(json, "\"RESOURCE_ALREADY_EXISTS\"");
    }
}
