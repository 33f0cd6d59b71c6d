pub mod application;
pub mod auth;
pub mod authz;
pub mod error;
pub mod health;
pub mod job;
pub mod profile;
pub mod validation;

use actix_web::web::{self, ServiceConfig};
use serde::Serialize;
use sqlx::{Pool, Sqlite};

use crate::auth::jwt::TokenIssuer;

/// Plain acknowledgement body used by mutation endpoints
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Assemble the full HTTP surface onto a ServiceConfig
///
/// Shared between `main` and the integration tests so both drive the
/// same app: state, extractor configs, and every route group.
pub fn app_config(pool: Pool<Sqlite>, issuer: TokenIssuer) -> impl FnOnce(&mut ServiceConfig) {
    move |config: &mut ServiceConfig| {
        config
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(issuer.clone()))
            .app_data(web::Data::new(auth::AuthService::new(
                pool.clone(),
                issuer.clone(),
            )))
            .app_data(web::Data::new(job::JobService::new(pool.clone())))
            .app_data(web::Data::new(application::ApplicationService::new(
                pool.clone(),
            )))
            .app_data(web::Data::new(profile::ProfileService::new(pool)))
            .app_data(validation::json_config())
            .app_data(validation::path_config())
            .configure(health::health_config)
            .configure(auth::handlers::auth_config)
            .configure(job::handlers::job_config)
            .configure(application::handlers::application_config)
            .configure(profile::handlers::profile_config);
    }
}
