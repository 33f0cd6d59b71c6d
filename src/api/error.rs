use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

use crate::auth::password::PasswordError;

/// Error payload returned to callers
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub fields: serde_json::Value,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            fields: serde_json::Value::Null,
        }
    }
}

/// Request-level errors
///
/// Every service operation funnels failures through this taxonomy; the
/// `ResponseError` impl maps each variant to its status code and a short
/// message. Storage failures are logged here and surfaced as opaque 500s.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input
    Validation(String),

    /// Missing, malformed, or expired identity assertion
    Unauthenticated(String),

    /// Authenticated but not authorized for this resource
    Forbidden(String),

    /// Resource absent, or absent for this principal
    NotFound(String),

    /// Uniqueness violation
    Conflict(String),

    /// Business-rule violation
    InvalidOperation(String),

    /// Storage operation failed
    Database(sqlx::Error),

    /// Anything else unexpected
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "validation error: {}", msg),
            ApiError::Unauthenticated(msg) => write!(f, "unauthenticated: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "conflict: {}", msg),
            ApiError::InvalidOperation(msg) => write!(f, "invalid operation: {}", msg),
            ApiError::Database(e) => write!(f, "database error: {}", e),
            ApiError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Database(e) => {
                error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            ApiError::Validation(msg)
            | ApiError::Unauthenticated(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::InvalidOperation(msg) => {
                warn!("Request rejected: {}", self);
                msg.clone()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(message))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        ApiError::Internal(format!("token issuance failed: {}", e))
    }
}

/// Map a unique-constraint violation to Conflict, anything else to a
/// storage failure. Used where an insert backs a check performed earlier
/// in the same transaction, so a lost race still reports 409.
pub fn conflict_on_unique(e: sqlx::Error, message: &str) -> ApiError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            ApiError::Conflict(message.to_string())
        }
        _ => ApiError::Database(e),
    }
}
