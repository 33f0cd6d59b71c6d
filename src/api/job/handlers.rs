use actix_web::web::{scope, Data, Path, ServiceConfig};
use actix_web::{delete, get, post, put, HttpResponse};
use actix_web_validator::Json;

use super::dto::{JobCreatedResponse, JobDetailResponse, JobListResponse, JobPayload};
use super::service::JobService;
use crate::api::error::ApiError;
use crate::api::MessageResponse;
use crate::auth::principal::AuthUser;

#[get("")]
async fn list_jobs(_user: AuthUser, service: Data<JobService>) -> Result<HttpResponse, ApiError> {
    let jobs = service.list().await?;
    Ok(HttpResponse::Ok().json(JobListResponse { jobs }))
}

#[post("")]
async fn create_job(
    user: AuthUser,
    service: Data<JobService>,
    payload: Json<JobPayload>,
) -> Result<HttpResponse, ApiError> {
    let job_id = service.create(&user, &payload).await?;
    Ok(HttpResponse::Created().json(JobCreatedResponse {
        message: "Job created successfully".to_string(),
        job_id,
    }))
}

#[get("/{id}")]
async fn get_job(
    _user: AuthUser,
    service: Data<JobService>,
    path: Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let job = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobDetailResponse { job }))
}

#[put("/{id}")]
async fn update_job(
    user: AuthUser,
    service: Data<JobService>,
    path: Path<i64>,
    payload: Json<JobPayload>,
) -> Result<HttpResponse, ApiError> {
    service.update(&user, path.into_inner(), &payload).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Job updated successfully")))
}

#[delete("/{id}")]
async fn delete_job(
    user: AuthUser,
    service: Data<JobService>,
    path: Path<i64>,
) -> Result<HttpResponse, ApiError> {
    service.delete(&user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Job deleted successfully")))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/jobs")
            .service(list_jobs)
            .service(create_job)
            .service(get_job)
            .service(update_job)
            .service(delete_job),
    );
}
