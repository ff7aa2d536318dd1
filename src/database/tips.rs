// ABOUTME: Database operations for the shared wellness tips catalog
// ABOUTME: List, fetch, create, update and delete tips; tips have no owning user

use super::{Database, DatabaseError, DatabaseResult};
use crate::models::{NewTip, Tip};
use chrono::Utc;
use tracing::{debug, info};

impl Database {
    /// Create the tips table
    pub(super) async fn migrate_tips(&self) -> DatabaseResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS tips (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                category TEXT NOT NULL,
                date DATE NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::migration("tips", e))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tips_date ON tips(date)")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::migration("tips", e))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tips_category ON tips(category)")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::migration("tips", e))?;

        Ok(())
    }

    /// List every tip, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_tips(&self) -> DatabaseResult<Vec<Tip>> {
        let tips = sqlx::query_as::<_, Tip>(
            r"
            SELECT id, title, content, category, date
            FROM tips
            ORDER BY date DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tips)
    }

    /// List tips in one category, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_tips_by_category(&self, category: &str) -> DatabaseResult<Vec<Tip>> {
        let tips = sqlx::query_as::<_, Tip>(
            r"
            SELECT id, title, content, category, date
            FROM tips
            WHERE category = $1
            ORDER BY date DESC, id DESC
            ",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(tips)
    }

    /// Number of tips in the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_tips(&self) -> DatabaseResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tips")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Get a tip by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_tip(&self, tip_id: i64) -> DatabaseResult<Option<Tip>> {
        let tip = sqlx::query_as::<_, Tip>(
            "SELECT id, title, content, category, date FROM tips WHERE id = $1",
        )
        .bind(tip_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tip)
    }

    /// Add a tip; the date defaults to today (UTC)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_tip(&self, new_tip: &NewTip) -> DatabaseResult<Tip> {
        let date = new_tip.date.unwrap_or_else(|| Utc::now().date_naive());

        let tip = sqlx::query_as::<_, Tip>(
            r"
            INSERT INTO tips (title, content, category, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, category, date
            ",
        )
        .bind(&new_tip.title)
        .bind(&new_tip.content)
        .bind(&new_tip.category)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        info!(tip_id = tip.id, category = %tip.category, "Tip created");
        Ok(tip)
    }

    /// Replace a tip's fields; `None` if no tip has this id
    ///
    /// A missing `date` keeps the stored one.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_tip(&self, tip_id: i64, update: &NewTip) -> DatabaseResult<Option<Tip>> {
        let tip = sqlx::query_as::<_, Tip>(
            r"
            UPDATE tips
            SET title = $1, content = $2, category = $3, date = COALESCE($4, date)
            WHERE id = $5
            RETURNING id, title, content, category, date
            ",
        )
        .bind(&update.title)
        .bind(&update.content)
        .bind(&update.category)
        .bind(update.date)
        .bind(tip_id)
        .fetch_optional(&self.pool)
        .await?;

        if tip.is_none() {
            debug!(tip_id, "Tip update matched no rows");
        }
        Ok(tip)
    }

    /// Delete a tip; `false` if no tip had this id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_tip(&self, tip_id: i64) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM tips WHERE id = $1")
            .bind(tip_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
