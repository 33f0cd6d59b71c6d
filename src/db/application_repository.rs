use chrono::NaiveDateTime;
use sqlx::{Pool, Sqlite, SqliteConnection};
use tracing::debug;

use crate::db::models::{ApplicationRef, ApplicationWithContext};

/// Repository for application database operations
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// All applications submitted by `user_id`, newest first, joined with
    /// job and applicant details
    pub async fn list_for_user(
        pool: &Pool<Sqlite>,
        user_id: i64,
    ) -> Result<Vec<ApplicationWithContext>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT a.id, a.job_id, a.user_id, a.status, a.created_at, a.updated_at,
                   j.title AS job_title, j.company AS job_company, j.location AS job_location,
                   u.name AS user_name
            FROM applications a
            JOIN jobs j ON a.job_id = j.id
            JOIN users u ON a.user_id = u.id
            WHERE a.user_id = ?
            ORDER BY a.created_at DESC, a.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Single application scoped to its applicant. Rows owned by someone
    /// else are indistinguishable from absent rows.
    pub async fn find_for_user(
        pool: &Pool<Sqlite>,
        id: i64,
        user_id: i64,
    ) -> Result<Option<ApplicationWithContext>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT a.id, a.job_id, a.user_id, a.status, a.created_at, a.updated_at,
                   j.title AS job_title, j.company AS job_company, j.location AS job_location,
                   u.name AS user_name
            FROM applications a
            JOIN jobs j ON a.job_id = j.id
            JOIN users u ON a.user_id = u.id
            WHERE a.id = ? AND a.user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Existence and ownership projection, for use inside transactions
    pub async fn find_ref(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<ApplicationRef>, sqlx::Error> {
        sqlx::query_as("SELECT id, user_id FROM applications WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Whether `user_id` already applied to `job_id`
    pub async fn exists_for(
        conn: &mut SqliteConnection,
        job_id: i64,
        user_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM applications WHERE job_id = ? AND user_id = ?")
                .bind(job_id)
                .bind(user_id)
                .fetch_optional(conn)
                .await?;

        Ok(existing.is_some())
    }

    /// Insert a new pending application and return its id
    pub async fn insert(
        conn: &mut SqliteConnection,
        job_id: i64,
        user_id: i64,
        now: NaiveDateTime,
    ) -> Result<i64, sqlx::Error> {
        debug!("Creating application: job_id={}, applicant={}", job_id, user_id);

        sqlx::query_scalar(
            r#"
            INSERT INTO applications (job_id, user_id, status, created_at, updated_at)
            VALUES (?, ?, 'pending', ?, ?)
            RETURNING id
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await
    }

    pub async fn update_status(
        conn: &mut SqliteConnection,
        id: i64,
        status: &str,
        now: NaiveDateTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE applications SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(now)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM applications WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }

    /// Purge every application referencing a job; returns the number removed
    pub async fn delete_for_job(
        conn: &mut SqliteConnection,
        job_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE job_id = ?")
            .bind(job_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }
}
