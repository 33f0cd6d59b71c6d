use chrono::Utc;
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::api::error::ApiError;
use crate::auth::principal::AuthUser;
use crate::db::models::UserRow;
use crate::db::user_repository::UserRepository;

/// Profile operations; the principal is always the subject, so no
/// cross-entity authorization applies here.
pub struct ProfileService {
    pool: Pool<Sqlite>,
}

impl ProfileService {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn get(&self, principal: &AuthUser) -> Result<UserRow, ApiError> {
        UserRepository::find_by_id(&self.pool, principal.id)
            .await?
            .ok_or_else(user_not_found)
    }

    pub async fn update_name(&self, principal: &AuthUser, name: &str) -> Result<(), ApiError> {
        let touched =
            UserRepository::update_name(&self.pool, principal.id, name, Utc::now().naive_utc())
                .await?;
        if touched == 0 {
            return Err(user_not_found());
        }

        info!("Profile updated: id={}", principal.id);
        Ok(())
    }
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}
