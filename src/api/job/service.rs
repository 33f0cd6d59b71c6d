use chrono::Utc;
use sqlx::{Pool, Sqlite};
use tracing::info;

use super::dto::JobPayload;
use crate::api::authz::ensure_owner;
use crate::api::error::ApiError;
use crate::auth::principal::AuthUser;
use crate::db::application_repository::ApplicationRepository;
use crate::db::job_repository::JobRepository;
use crate::db::models::JobWithOwner;

/// Job registry business logic
///
/// Only the posting user may mutate or delete a job; everyone
/// authenticated may browse.
pub struct JobService {
    pool: Pool<Sqlite>,
}

impl JobService {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<JobWithOwner>, ApiError> {
        let jobs = JobRepository::list_with_owner(&self.pool).await?;
        Ok(jobs)
    }

    pub async fn create(&self, principal: &AuthUser, payload: &JobPayload) -> Result<i64, ApiError> {
        let now = Utc::now().naive_utc();
        let job_id = JobRepository::insert(&self.pool, payload, principal.id, now).await?;

        info!("Job created: id={}, owner={}", job_id, principal.id);
        Ok(job_id)
    }

    pub async fn get(&self, id: i64) -> Result<JobWithOwner, ApiError> {
        JobRepository::find_with_owner(&self.pool, id)
            .await?
            .ok_or_else(job_not_found)
    }

    /// Overwrite all mutable fields, owner permitting
    pub async fn update(
        &self,
        principal: &AuthUser,
        id: i64,
        payload: &JobPayload,
    ) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        let job = JobRepository::find_ref(&mut tx, id)
            .await?
            .ok_or_else(job_not_found)?;
        ensure_owner(&job, principal.id, "You do not have permission to edit this job")?;

        JobRepository::update(&mut tx, id, payload, Utc::now().naive_utc()).await?;
        tx.commit().await?;

        info!("Job updated: id={}", id);
        Ok(())
    }

    /// Delete a job and every application referencing it
    ///
    /// The purge and the job deletion share one transaction: if the purge
    /// fails the job survives untouched.
    pub async fn delete(&self, principal: &AuthUser, id: i64) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        let job = JobRepository::find_ref(&mut tx, id)
            .await?
            .ok_or_else(job_not_found)?;
        ensure_owner(&job, principal.id, "You do not have permission to delete this job")?;

        let purged = ApplicationRepository::delete_for_job(&mut tx, id).await?;
        JobRepository::delete(&mut tx, id).await?;
        tx.commit().await?;

        info!("Job deleted: id={}, applications purged={}", id, purged);
        Ok(())
    }
}

fn job_not_found() -> ApiError {
    ApiError::NotFound("Job not found".to_string())
}
