// ABOUTME: Main library entry point for the wellness data layer
// ABOUTME: Typed async CRUD over users, tips, reminders and daily health data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellness Data
//!
//! Data-access layer for a wellness application. Every operation is a single
//! parameterized SQL statement against `SQLite` (via `sqlx`), returning typed records.
//!
//! ## Modules
//!
//! - **database**: the [`Database`](database::Database) handle and all operations
//! - **models**: row and input structures (`User`, `PublicUser`, `Tip`, `Reminder`, `HealthData`)
//! - **auth**: bcrypt password hashing and verification
//! - **config**: database configuration loaded from the environment
//! - **errors**: `AppError` / `ErrorCode` for callers above this layer
//! - **logging**: `tracing-subscriber` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wellness_data::database::Database;
//! use wellness_data::models::NewUser;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Database::new("sqlite:./data/wellness.db").await?;
//!
//!     let id = db
//!         .create_user(&NewUser::new("ada@example.com", "s3cret-pass", "Ada"))
//!         .await?;
//!
//!     let user = db.verify_user("ada@example.com", "s3cret-pass").await?;
//!     assert_eq!(user.map(|u| u.id), Some(id));
//!     Ok(())
//! }
//! ```

/// bcrypt password hashing
pub mod auth;

/// Database configuration
pub mod config;

/// Application constants grouped by domain
pub mod constants;

/// Database handle and operations
pub mod database;

/// Application error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Data models
pub mod models;
