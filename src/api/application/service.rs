use chrono::Utc;
use sqlx::{Pool, Sqlite};
use tracing::info;

use super::models::ApplicationStatus;
use crate::api::authz::{ensure_owner, OwnedRow};
use crate::api::error::{conflict_on_unique, ApiError};
use crate::auth::principal::AuthUser;
use crate::db::application_repository::ApplicationRepository;
use crate::db::job_repository::JobRepository;
use crate::db::models::ApplicationWithContext;

/// Application ledger business logic
///
/// An application ties one applicant to one job. At most one per
/// (job, user) pair, never to the applicant's own job, and only the
/// applicant may change or remove it.
pub struct ApplicationService {
    pool: Pool<Sqlite>,
}

impl ApplicationService {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn list(&self, principal: &AuthUser) -> Result<Vec<ApplicationWithContext>, ApiError> {
        let applications = ApplicationRepository::list_for_user(&self.pool, principal.id).await?;
        Ok(applications)
    }

    /// Apply to a job
    ///
    /// Preconditions, in order, inside one transaction: the job exists,
    /// the principal has not applied to it yet, and the principal does
    /// not own it. The UNIQUE(job_id, user_id) index backstops the
    /// duplicate check against concurrent submissions.
    pub async fn create(&self, principal: &AuthUser, job_id: i64) -> Result<i64, ApiError> {
        let mut tx = self.pool.begin().await?;

        let job = JobRepository::find_ref(&mut tx, job_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

        if ApplicationRepository::exists_for(&mut tx, job_id, principal.id).await? {
            return Err(already_applied());
        }

        if job.is_owned_by(principal.id) {
            return Err(ApiError::InvalidOperation(
                "You cannot apply to your own job".to_string(),
            ));
        }

        let application_id =
            ApplicationRepository::insert(&mut tx, job_id, principal.id, Utc::now().naive_utc())
                .await
                .map_err(|e| conflict_on_unique(e, "You have already applied to this job"))?;

        tx.commit().await?;

        info!(
            "Application created: id={}, job_id={}, applicant={}",
            application_id, job_id, principal.id
        );
        Ok(application_id)
    }

    /// Fetch one application, scoped to the applicant. Someone else's
    /// application reports NotFound, not Forbidden.
    pub async fn get(
        &self,
        principal: &AuthUser,
        id: i64,
    ) -> Result<ApplicationWithContext, ApiError> {
        ApplicationRepository::find_for_user(&self.pool, id, principal.id)
            .await?
            .ok_or_else(application_not_found)
    }

    pub async fn update_status(
        &self,
        principal: &AuthUser,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        let application = ApplicationRepository::find_ref(&mut tx, id)
            .await?
            .ok_or_else(application_not_found)?;
        ensure_owner(
            &application,
            principal.id,
            "You do not have permission to edit this application",
        )?;

        ApplicationRepository::update_status(&mut tx, id, status.as_str(), Utc::now().naive_utc())
            .await?;
        tx.commit().await?;

        info!("Application updated: id={}, status={}", id, status);
        Ok(())
    }

    pub async fn delete(&self, principal: &AuthUser, id: i64) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        let application = ApplicationRepository::find_ref(&mut tx, id)
            .await?
            .ok_or_else(application_not_found)?;
        ensure_owner(
            &application,
            principal.id,
            "You do not have permission to delete this application",
        )?;

        ApplicationRepository::delete(&mut tx, id).await?;
        tx.commit().await?;

        info!("Application deleted: id={}", id);
        Ok(())
    }
}

fn application_not_found() -> ApiError {
    ApiError::NotFound("Application not found".to_string())
}

fn already_applied() -> ApiError {
    ApiError::Conflict("You have already applied to this job".to_string())
}
