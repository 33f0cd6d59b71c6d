use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User fields safe to echo back to the caller
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// Response for successful registration and login
#[derive(Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}
