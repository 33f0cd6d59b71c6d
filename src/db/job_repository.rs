use chrono::NaiveDateTime;
use sqlx::{Pool, Sqlite, SqliteConnection};
use tracing::debug;

use crate::api::job::dto::JobPayload;
use crate::db::models::{JobRef, JobWithOwner};

/// Repository for job database operations
pub struct JobRepository;

impl JobRepository {
    /// All jobs joined with their owner's name, newest first
    pub async fn list_with_owner(pool: &Pool<Sqlite>) -> Result<Vec<JobWithOwner>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT j.id, j.title, j.description, j.company, j.location, j.salary,
                   j.employment_type, j.user_id, j.created_at, j.updated_at,
                   u.name AS user_name
            FROM jobs j
            JOIN users u ON j.user_id = u.id
            ORDER BY j.created_at DESC, j.id DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_with_owner(
        pool: &Pool<Sqlite>,
        id: i64,
    ) -> Result<Option<JobWithOwner>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT j.id, j.title, j.description, j.company, j.location, j.salary,
                   j.employment_type, j.user_id, j.created_at, j.updated_at,
                   u.name AS user_name
            FROM jobs j
            JOIN users u ON j.user_id = u.id
            WHERE j.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Existence and ownership projection, for use inside transactions
    pub async fn find_ref(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<JobRef>, sqlx::Error> {
        sqlx::query_as("SELECT id, user_id FROM jobs WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Insert a new job owned by `user_id` and return its id
    pub async fn insert(
        pool: &Pool<Sqlite>,
        payload: &JobPayload,
        user_id: i64,
        now: NaiveDateTime,
    ) -> Result<i64, sqlx::Error> {
        debug!("Creating job: title={}, owner={}", payload.title, user_id);

        sqlx::query_scalar(
            r#"
            INSERT INTO jobs (title, description, company, location, salary,
                              employment_type, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.company)
        .bind(&payload.location)
        .bind(&payload.salary)
        .bind(&payload.employment_type)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Overwrite all mutable fields; the owner never changes
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        payload: &JobPayload,
        now: NaiveDateTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET title = ?, description = ?, company = ?, location = ?,
                salary = ?, employment_type = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.company)
        .bind(&payload.location)
        .bind(&payload.salary)
        .bind(&payload.employment_type)
        .bind(now)
        .bind(id)
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
