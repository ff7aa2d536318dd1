// ABOUTME: Password hashing and verification with bcrypt
// ABOUTME: Runs the expensive hash work on blocking threads so the async executor stays free
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Password hashing
//!
//! - [`hash_password`] salts and hashes a plaintext password at
//!   [`BCRYPT_COST`](crate::constants::security::BCRYPT_COST).
//! - [`verify_password`] checks a plaintext password against a stored hash. A hash
//!   that bcrypt cannot parse counts as a mismatch, so a corrupted row can never
//!   authenticate.
//! - [`verify_dummy_password`] pays the same bcrypt cost when no stored hash exists,
//!   so a lookup miss takes as long as a wrong password.

use crate::constants::security::BCRYPT_COST;
use crate::database::{DatabaseError, DatabaseResult};
use tokio::sync::OnceCell;
use tokio::task;

/// Hash compared against when the account does not exist, computed on first use
pub(crate) static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

/// Hash a plaintext password
///
/// # Errors
///
/// Returns an error if the blocking task fails or bcrypt rejects the input
pub async fn hash_password(password: &str) -> DatabaseResult<String> {
    let password = password.to_owned();
    task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|e| DatabaseError::PasswordHashError {
            context: format!("Password hashing task failed: {e}"),
        })?
        .map_err(DatabaseError::from)
}

/// Compare a plaintext password against a stored bcrypt hash
///
/// # Errors
///
/// Returns an error only if the blocking task itself fails
pub async fn verify_password(password: &str, password_hash: &str) -> DatabaseResult<bool> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    task::spawn_blocking(move || bcrypt::verify(password, &password_hash).unwrap_or(false))
        .await
        .map_err(|e| DatabaseError::PasswordHashError {
            context: format!("Password verification task failed: {e}"),
        })
}

/// Run a full bcrypt verification against a throwaway hash and discard the outcome
///
/// # Errors
///
/// Returns an error if hashing or the verification task fails
pub async fn verify_dummy_password(password: &str) -> DatabaseResult<()> {
    let dummy_hash = DUMMY_HASH
        .get_or_try_init(|| hash_password("wellness-data-unknown-account"))
        .await?;
    verify_password(password, dummy_hash).await?;
    Ok(())
}
