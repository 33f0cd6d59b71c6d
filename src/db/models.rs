use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of a user
///
/// The credential hash never leaves the server; it is skipped during
/// serialization so profile responses cannot leak it.
#[derive(Debug, FromRow, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Job row joined with the owner's display name
#[derive(Debug, FromRow, Serialize)]
pub struct JobWithOwner {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub user_id: i64,
    pub user_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Application row joined with job and applicant details
#[derive(Debug, FromRow, Serialize)]
pub struct ApplicationWithContext {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub status: String,
    pub job_title: String,
    pub job_company: String,
    pub job_location: String,
    pub user_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Minimal job projection used for existence and ownership checks
#[derive(Debug, FromRow)]
pub struct JobRef {
    pub id: i64,
    pub user_id: i64,
}

/// Minimal application projection used for existence and ownership checks
#[derive(Debug, FromRow)]
pub struct ApplicationRef {
    pub id: i64,
    pub user_id: i64,
}
