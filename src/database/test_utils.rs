// ABOUTME: Test utilities for database operations and in-memory test database creation
// ABOUTME: Provides helper functions for creating isolated test database instances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Database, DatabaseResult};

/// Create a migrated, empty in-memory database
///
/// Each call gets its own isolated instance.
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> DatabaseResult<Database> {
    Database::new("sqlite::memory:").await
}
