use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::JobWithOwner;

/// Body for creating and updating a job posting. All text fields are
/// required except salary.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct JobPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub employment_type: String,
}

#[derive(Serialize)]
pub struct JobCreatedResponse {
    pub message: String,
    pub job_id: i64,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobWithOwner>,
}

#[derive(Serialize)]
pub struct JobDetailResponse {
    pub job: JobWithOwner,
}
