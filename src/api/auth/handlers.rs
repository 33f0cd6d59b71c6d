use actix_web::web::{scope, Data, ServiceConfig};
use actix_web::{post, HttpResponse};
use actix_web_validator::Json;

use super::dto::{LoginRequest, RegisterRequest};
use super::service::AuthService;
use crate::api::error::ApiError;

#[post("/register")]
async fn register(
    service: Data<AuthService>,
    payload: Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = service.register(&payload).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
async fn login(
    service: Data<AuthService>,
    payload: Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = service.login(&payload).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn auth_config(config: &mut ServiceConfig) {
    config.service(scope("/auth").service(register).service(login));
}
