// ABOUTME: Database operations for daily health measurements
// ABOUTME: One record per user per calendar day, written by upsert and read as a 7-day history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Database, DatabaseError, DatabaseResult};
use crate::constants::limits::HEALTH_HISTORY_DAYS;
use crate::models::{HealthData, HealthDataInput, SleepQuality};
use chrono::{NaiveDate, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;

impl Database {
    /// Create the health data table
    pub(super) async fn migrate_health_data(&self) -> DatabaseResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                steps INTEGER NOT NULL DEFAULT 0,
                water_intake REAL NOT NULL DEFAULT 0,
                sleep_hours REAL NOT NULL DEFAULT 0,
                sleep_quality TEXT NOT NULL DEFAULT 'fair',
                UNIQUE(user_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::migration("health_data", e))?;

        Ok(())
    }

    /// Record today's (UTC) measurements for a user, replacing any already recorded today
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn upsert_health_data(
        &self,
        user_id: i64,
        input: &HealthDataInput,
    ) -> DatabaseResult<HealthData> {
        let today = Utc::now().date_naive();
        self.upsert_health_data_for_date(user_id, today, input)
            .await
    }

    /// Record measurements for a user on `date`
    ///
    /// An existing record for the same (user, date) has all four measured fields
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn upsert_health_data_for_date(
        &self,
        user_id: i64,
        date: NaiveDate,
        input: &HealthDataInput,
    ) -> DatabaseResult<HealthData> {
        let row = sqlx::query(
            r"
            INSERT INTO health_data (user_id, date, steps, water_intake, sleep_hours, sleep_quality)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(user_id, date) DO UPDATE SET
                steps = excluded.steps,
                water_intake = excluded.water_intake,
                sleep_hours = excluded.sleep_hours,
                sleep_quality = excluded.sleep_quality
            RETURNING id, user_id, date, steps, water_intake, sleep_hours, sleep_quality
            ",
        )
        .bind(user_id)
        .bind(date)
        .bind(input.steps)
        .bind(input.water_intake)
        .bind(input.sleep_hours)
        .bind(input.sleep_quality.as_str())
        .fetch_one(&self.pool)
        .await?;

        debug!(user_id, %date, "Health data recorded");
        Self::row_to_health_data(&row)
    }

    /// The user's most recent day-records, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_health_data(&self, user_id: i64) -> DatabaseResult<Vec<HealthData>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, date, steps, water_intake, sleep_hours, sleep_quality
            FROM health_data
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(HEALTH_HISTORY_DAYS)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_health_data).collect()
    }

    fn row_to_health_data(row: &SqliteRow) -> DatabaseResult<HealthData> {
        let sleep_quality: String = row.try_get("sleep_quality")?;

        Ok(HealthData {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            date: row.try_get("date")?,
            steps: row.try_get("steps")?,
            water_intake: row.try_get("water_intake")?,
            sleep_hours: row.try_get("sleep_hours")?,
            sleep_quality: SleepQuality::parse(&sleep_quality),
        })
    }
}
