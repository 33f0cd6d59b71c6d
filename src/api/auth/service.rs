use chrono::Utc;
use sqlx::{Pool, Sqlite};
use tracing::info;

use super::dto::{AuthResponse, LoginRequest, RegisterRequest, UserSummary};
use crate::api::error::{conflict_on_unique, ApiError};
use crate::auth::jwt::TokenIssuer;
use crate::auth::password;
use crate::db::user_repository::UserRepository;

/// Registration and login logic
pub struct AuthService {
    pool: Pool<Sqlite>,
    issuer: TokenIssuer,
}

impl AuthService {
    pub fn new(pool: Pool<Sqlite>, issuer: TokenIssuer) -> Self {
        Self { pool, issuer }
    }

    /// Create a new account and issue its first token
    ///
    /// The email uniqueness check and the insert run in one transaction;
    /// the UNIQUE constraint on users.email backstops a lost race.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let mut tx = self.pool.begin().await?;

        if UserRepository::find_id_by_email(&mut tx, &req.email)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = password::hash_password(&req.password).await?;
        let now = Utc::now().naive_utc();

        let user_id = UserRepository::insert(&mut tx, &req.email, &password_hash, &req.name, now)
            .await
            .map_err(|e| conflict_on_unique(e, "Email already registered"))?;

        tx.commit().await?;

        let token = self.issuer.issue(user_id, &req.email)?;
        info!("User registered: id={}", user_id);

        Ok(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user: UserSummary {
                id: user_id,
                email: req.email.clone(),
                name: req.name.clone(),
            },
        })
    }

    /// Exchange credentials for a token
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let user = UserRepository::find_by_email(&self.pool, &req.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let matches = password::verify_password(&req.password, &user.password_hash).await?;
        if !matches {
            return Err(invalid_credentials());
        }

        let token = self.issuer.issue(user.id, &user.email)?;
        info!("User logged in: id={}", user.id);

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            token,
            user: UserSummary {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        })
    }
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthenticated("Invalid credentials".to_string())
}
