// ABOUTME: Database operations for user-owned reminders
// ABOUTME: Every update and delete is scoped by reminder id AND owning user id

use super::{Database, DatabaseError, DatabaseResult};
use crate::models::{NewReminder, Reminder};
use tracing::{debug, info};

impl Database {
    /// Create the reminders table
    pub(super) async fn migrate_reminders(&self) -> DatabaseResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS reminders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                title TEXT NOT NULL,
                time TEXT NOT NULL,
                type TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::migration("reminders", e))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reminders_user_id ON reminders(user_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::migration("reminders", e))?;

        Ok(())
    }

    /// Create a reminder for `user_id`; active unless the input says otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails (including an unknown user id)
    pub async fn create_reminder(
        &self,
        user_id: i64,
        new_reminder: &NewReminder,
    ) -> DatabaseResult<Reminder> {
        let reminder = sqlx::query_as::<_, Reminder>(
            r"
            INSERT INTO reminders (user_id, title, time, type, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, time, type, is_active
            ",
        )
        .bind(user_id)
        .bind(&new_reminder.title)
        .bind(new_reminder.time)
        .bind(&new_reminder.reminder_type)
        .bind(new_reminder.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        info!(
            reminder_id = reminder.id,
            user_id,
            reminder_type = %reminder.reminder_type,
            "Reminder created"
        );
        Ok(reminder)
    }

    /// List a user's reminders by time of day, earliest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_reminders(&self, user_id: i64) -> DatabaseResult<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, Reminder>(
            r"
            SELECT id, user_id, title, time, type, is_active
            FROM reminders
            WHERE user_id = $1
            ORDER BY time ASC, id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders)
    }

    /// Turn a reminder on or off
    ///
    /// Returns `None` when no reminder with this id belongs to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn set_reminder_active(
        &self,
        reminder_id: i64,
        user_id: i64,
        is_active: bool,
    ) -> DatabaseResult<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, Reminder>(
            r"
            UPDATE reminders
            SET is_active = $1
            WHERE id = $2 AND user_id = $3
            RETURNING id, user_id, title, time, type, is_active
            ",
        )
        .bind(is_active)
        .bind(reminder_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        if reminder.is_none() {
            debug!(reminder_id, user_id, "Reminder toggle matched no rows");
        }
        Ok(reminder)
    }

    /// Delete a reminder owned by `user_id`; `false` if nothing matched
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_reminder(&self, reminder_id: i64, user_id: i64) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = $1 AND user_id = $2")
            .bind(reminder_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
