// ABOUTME: User management database operations
// ABOUTME: Handles registration with hashed passwords, credential checks, and profile lookup

use super::{Database, DatabaseError, DatabaseResult};
use crate::auth::{hash_password, verify_dummy_password, verify_password};
use crate::models::{NewUser, PublicUser, User, UserRole};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::{debug, info, warn};

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> DatabaseResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                name TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'user',
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::migration("users", e))?;

        Ok(())
    }

    /// Register a user and return the new id
    ///
    /// The password is hashed with bcrypt before it reaches the database.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email is already in use (`DatabaseError::DuplicateEmail`)
    /// - Password hashing fails
    /// - Database operation fails
    pub async fn create_user(&self, new_user: &NewUser) -> DatabaseResult<i64> {
        let password_hash = hash_password(&new_user.password).await?;
        let role = new_user.role.unwrap_or_default();

        let result = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (email, password, name, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&new_user.email)
        .bind(&password_hash)
        .bind(&new_user.name)
        .bind(role.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => {
                info!(user_id = id, role = %role, "User created");
                Ok(id)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                warn!("User creation rejected: email already in use");
                Err(DatabaseError::DuplicateEmail {
                    email: new_user.email.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check credentials and return the user without its password
    ///
    /// Unknown email and wrong password both yield `Ok(None)` so callers cannot tell
    /// which part was wrong.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or the verification task fails
    pub async fn verify_user(
        &self,
        email: &str,
        password: &str,
    ) -> DatabaseResult<Option<PublicUser>> {
        let Some(user) = self.get_user_by_email(email).await? else {
            // Same bcrypt cost as a wrong password so response time does not reveal
            // whether the email is registered
            verify_dummy_password(password).await?;
            debug!("Credential check failed");
            return Ok(None);
        };

        if verify_password(password, &user.password_hash).await? {
            debug!(user_id = user.id, "Credential check succeeded");
            Ok(Some(user.into_public()))
        } else {
            debug!("Credential check failed");
            Ok(None)
        }
    }

    /// Get a user by ID, without the password column
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_id(&self, user_id: i64) -> DatabaseResult<Option<PublicUser>> {
        let row = sqlx::query(
            r"
            SELECT id, email, name, role, created_at
            FROM users WHERE id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_public_user).transpose()
    }

    /// Get the full user row, hash included, by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub(crate) async fn get_user_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, email, password, name, role, created_at
            FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Convert a database row to a User struct
    fn row_to_user(row: &SqliteRow) -> DatabaseResult<User> {
        let role: String = row.try_get("role")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(User {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password")?,
            name: row.try_get("name")?,
            role: UserRole::parse(&role),
            created_at,
        })
    }

    /// Convert a password-less projection row to a `PublicUser`
    fn row_to_public_user(row: &SqliteRow) -> DatabaseResult<PublicUser> {
        let role: String = row.try_get("role")?;

        Ok(PublicUser {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            role: UserRole::parse(&role),
            created_at: row.try_get("created_at")?,
        })
    }
}
