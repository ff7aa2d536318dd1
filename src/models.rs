// ABOUTME: Core data models for users, tips, reminders and daily health records
// ABOUTME: Typed row structures returned by the database layer plus their input shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every database operation returns one of these structures instead of untyped rows.
//!
//! ## Users
//!
//! [`User`] is the full `users` row including the bcrypt hash. It never leaves the
//! crate through a public operation: [`PublicUser`] is the projection returned by
//! `verify_user` and `get_user_by_id`, and it has no password field at all.
//!
//! ## Reference data and per-user data
//!
//! - [`Tip`]: globally shared catalog entries, not owned by any user
//! - [`Reminder`]: owned by one user; every mutation is scoped by owner
//! - [`HealthData`]: one row per user per calendar day

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

// ============================================================================
// Users
// ============================================================================

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular account
    #[default]
    User,
    /// Administrative account
    Admin,
}

impl UserRole {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            // Anything unrecognized is a regular account
            _ => Self::User,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full user record, including the stored password hash
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Primary key
    pub id: i64,
    /// Unique login email
    pub email: String,
    /// bcrypt hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Account role
    pub role: UserRole,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Drop the password hash
    #[must_use]
    pub fn into_public(self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// User record without credentials, safe to hand to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Primary key
    pub id: i64,
    /// Unique login email
    pub email: String,
    /// Display name
    pub name: String,
    /// Account role
    pub role: UserRole,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Registration input; the password is plaintext and is hashed before storage
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Display name
    pub name: String,
    /// Role, `user` when omitted
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl NewUser {
    /// Registration with the default role
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role: None,
        }
    }
}

// ============================================================================
// Tips
// ============================================================================

/// Wellness tip from the shared catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tip {
    /// Primary key
    pub id: i64,
    /// Short headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Free-form grouping (e.g. `hydration`, `sleep`)
    pub category: String,
    /// Publication date
    pub date: NaiveDate,
}

/// Fields for creating or replacing a tip
#[derive(Debug, Clone, Deserialize)]
pub struct NewTip {
    /// Short headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Free-form grouping
    pub category: String,
    /// Publication date; today on create, unchanged on update when omitted
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Reminders
// ============================================================================

/// User-owned reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    /// Primary key
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Short label
    pub title: String,
    /// Time of day the reminder fires
    pub time: NaiveTime,
    /// Reminder kind (e.g. `water`, `medication`)
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub reminder_type: String,
    /// Whether the reminder is enabled
    pub is_active: bool,
}

/// Fields for creating a reminder
#[derive(Debug, Clone, Deserialize)]
pub struct NewReminder {
    /// Short label
    pub title: String,
    /// Time of day the reminder fires
    pub time: NaiveTime,
    /// Reminder kind
    #[serde(rename = "type")]
    pub reminder_type: String,
    /// Initial state, active when omitted
    #[serde(default)]
    pub is_active: Option<bool>,
}

// ============================================================================
// Health data
// ============================================================================

/// Self-reported sleep quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    /// Restless or very short sleep
    Poor,
    /// Some disruption
    #[default]
    Fair,
    /// Rested
    Good,
    /// Fully rested
    Excellent,
}

impl SleepQuality {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "poor" => Self::Poor,
            "good" => Self::Good,
            "excellent" => Self::Excellent,
            // Default to Fair for unrecognized values
            _ => Self::Fair,
        }
    }
}

/// Measurements for one user on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthData {
    /// Primary key
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Calendar day (UTC) the measurements belong to
    pub date: NaiveDate,
    /// Step count
    pub steps: i64,
    /// Water intake in liters
    pub water_intake: f64,
    /// Hours slept
    pub sleep_hours: f64,
    /// Self-reported sleep quality
    pub sleep_quality: SleepQuality,
}

/// Measured fields written by a health data upsert
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthDataInput {
    /// Step count
    pub steps: i64,
    /// Water intake in liters
    pub water_intake: f64,
    /// Hours slept
    pub sleep_hours: f64,
    /// Self-reported sleep quality
    pub sleep_quality: SleepQuality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_defaults_to_user() {
        assert_eq!(UserRole::parse("admin"), UserRole::Admin);
        assert_eq!(UserRole::parse("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::parse("user"), UserRole::User);
        assert_eq!(UserRole::parse("superuser"), UserRole::User);
    }

    #[test]
    fn test_sleep_quality_parse() {
        for quality in [
            SleepQuality::Poor,
            SleepQuality::Fair,
            SleepQuality::Good,
            SleepQuality::Excellent,
        ] {
            assert_eq!(SleepQuality::parse(quality.as_str()), quality);
        }
        assert_eq!(SleepQuality::parse("unknown"), SleepQuality::Fair);
    }

    #[test]
    fn test_user_serialization_hides_password() {
        let user = User {
            id: 1,
            email: "ada@example.com".into(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".into(),
            name: "Ada".into(),
            role: UserRole::User,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "user");

        let public = user.into_public();
        assert_eq!(public.email, "ada@example.com");
    }

    #[test]
    fn test_reminder_type_field_name() {
        let reminder: NewReminder = serde_json::from_value(serde_json::json!({
            "title": "Drink water",
            "time": "09:30:00",
            "type": "water"
        }))
        .unwrap();

        assert_eq!(reminder.reminder_type, "water");
        assert_eq!(reminder.is_active, None);
    }
}
