use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::ApplicationStatus;
use crate::db::models::ApplicationWithContext;

#[derive(Debug, Deserialize, Validate)]
pub struct ApplicationRequest {
    #[validate(range(min = 1, message = "A job id is required"))]
    pub job_id: i64,
}

/// Status update body; deserialization already rejects values outside
/// the enum, before any lookup happens
#[derive(Debug, Deserialize, Validate)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

#[derive(Serialize)]
pub struct ApplicationCreatedResponse {
    pub message: String,
    pub application_id: i64,
}

#[derive(Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationWithContext>,
}

#[derive(Serialize)]
pub struct ApplicationDetailResponse {
    pub application: ApplicationWithContext,
}
