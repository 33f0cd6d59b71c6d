use actix_web::web::{scope, Data, ServiceConfig};
use actix_web::{get, put, HttpResponse};
use actix_web_validator::Json;

use super::dto::{ProfileResponse, UpdateProfileRequest};
use super::service::ProfileService;
use crate::api::error::ApiError;
use crate::api::MessageResponse;
use crate::auth::principal::AuthUser;

#[get("")]
async fn get_profile(
    user: AuthUser,
    service: Data<ProfileService>,
) -> Result<HttpResponse, ApiError> {
    let profile = service.get(&user).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse { user: profile }))
}

#[put("")]
async fn update_profile(
    user: AuthUser,
    service: Data<ProfileService>,
    payload: Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    service.update_name(&user, &payload.name).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Profile updated successfully")))
}

pub fn profile_config(config: &mut ServiceConfig) {
    config.service(scope("/api/profile").service(get_profile).service(update_profile));
}
