use actix_web::web::{scope, Data, Path, ServiceConfig};
use actix_web::{delete, get, post, put, HttpResponse};
use actix_web_validator::Json;

use super::dto::{
    ApplicationCreatedResponse, ApplicationDetailResponse, ApplicationListResponse,
    ApplicationRequest, StatusUpdateRequest,
};
use super::service::ApplicationService;
use crate::api::error::ApiError;
use crate::api::MessageResponse;
use crate::auth::principal::AuthUser;

#[get("")]
async fn list_applications(
    user: AuthUser,
    service: Data<ApplicationService>,
) -> Result<HttpResponse, ApiError> {
    let applications = service.list(&user).await?;
    Ok(HttpResponse::Ok().json(ApplicationListResponse { applications }))
}

#[post("")]
async fn create_application(
    user: AuthUser,
    service: Data<ApplicationService>,
    payload: Json<ApplicationRequest>,
) -> Result<HttpResponse, ApiError> {
    let application_id = service.create(&user, payload.job_id).await?;
    Ok(HttpResponse::Created().json(ApplicationCreatedResponse {
        message: "Application submitted successfully".to_string(),
        application_id,
    }))
}

#[get("/{id}")]
async fn get_application(
    user: AuthUser,
    service: Data<ApplicationService>,
    path: Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let application = service.get(&user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApplicationDetailResponse { application }))
}

#[put("/{id}")]
async fn update_application(
    user: AuthUser,
    service: Data<ApplicationService>,
    path: Path<i64>,
    payload: Json<StatusUpdateRequest>,
) -> Result<HttpResponse, ApiError> {
    service
        .update_status(&user, path.into_inner(), payload.status)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Application updated successfully")))
}

#[delete("/{id}")]
async fn delete_application(
    user: AuthUser,
    service: Data<ApplicationService>,
    path: Path<i64>,
) -> Result<HttpResponse, ApiError> {
    service.delete(&user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Application deleted successfully")))
}

pub fn application_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/applications")
            .service(list_applications)
            .service(create_application)
            .service(get_application)
            .service(update_application)
            .service(delete_application),
    );
}
