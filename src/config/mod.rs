// ABOUTME: Configuration management module for database and logging settings
// ABOUTME: Loads typed configuration from environment variables with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Database**: connection URL parsing and pool settings
//!
//! Logging configuration lives in [`crate::logging`].

/// Database connection configuration
pub mod database;

pub use database::{DatabaseConfig, DatabaseUrl};
