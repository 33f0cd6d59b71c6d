use chrono::NaiveDateTime;
use sqlx::{Pool, Sqlite, SqliteConnection};
use tracing::debug;

use crate::db::models::UserRow;

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Look up a user id by email, used for the registration uniqueness check.
    /// Takes a connection so callers can run it inside a transaction.
    pub async fn find_id_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(conn)
            .await
    }

    /// Insert a new user and return its id
    pub async fn insert(
        conn: &mut SqliteConnection,
        email: &str,
        password_hash: &str,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<i64, sqlx::Error> {
        debug!("Creating user: email={}", email);

        sqlx::query_scalar(
            r#"
            INSERT INTO users (email, password_hash, name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await
    }

    pub async fn find_by_email(
        pool: &Pool<Sqlite>,
        email: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Update the display name; returns the number of rows touched
    pub async fn update_name(
        pool: &Pool<Sqlite>,
        id: i64,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
