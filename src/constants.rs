// ABOUTME: System-wide constants and defaults for the wellness data layer
// ABOUTME: Groups hashing cost, query limits, and configuration defaults by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded values shared by the database layer, configuration loading and binaries.

/// Password hashing parameters
pub mod security {
    /// bcrypt work factor used for every stored password hash
    pub const BCRYPT_COST: u32 = 10;
}

/// Query and pool limits
pub mod limits {
    /// Number of day-records returned by a health history fetch
    pub const HEALTH_HISTORY_DAYS: i64 = 7;

    /// Default upper bound on pooled connections
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// Default time to wait for a pooled connection, in seconds
    pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
}

/// Default values applied when configuration is absent
pub mod defaults {
    /// Database used when `DATABASE_URL` is unset
    pub const DATABASE_URL: &str = "sqlite:./data/wellness.db";
}

/// Environment variable names read by configuration loaders
pub mod env_vars {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Run schema creation on connect (`true`/`false`)
    pub const DATABASE_AUTO_MIGRATE: &str = "DATABASE_AUTO_MIGRATE";
    /// Maximum pooled connections
    pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
    /// Pool acquire timeout in seconds
    pub const DATABASE_ACQUIRE_TIMEOUT_SECS: &str = "DATABASE_ACQUIRE_TIMEOUT_SECS";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const WELLNESS_DATA: &str = "wellness-data";
}
