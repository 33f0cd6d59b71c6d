//! Acting principal extraction
//!
//! `AuthUser` is the verified identity behind the current request. Every
//! protected handler takes it as an argument; extraction failure turns
//! into a 401 before the handler body runs.

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::api::error::ApiError;
use crate::auth::jwt::{bearer_token, TokenIssuer};

/// The authenticated principal for the current request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::Unauthenticated("no token".to_string()))?;

    let issuer = req
        .app_data::<web::Data<TokenIssuer>>()
        .ok_or_else(|| ApiError::Internal("token issuer not configured".to_string()))?;

    let claims = issuer
        .verify(bearer_token(header_value))
        .map_err(|_| ApiError::Unauthenticated("invalid token".to_string()))?;

    Ok(AuthUser {
        id: claims.user_id,
        email: claims.email,
    })
}
