//! Password hashing and verification
//!
//! bcrypt runs on the blocking thread pool so hashing never stalls the
//! async runtime.

use bcrypt::{hash, verify, DEFAULT_COST};
use std::fmt;

/// Errors from the hashing primitive
#[derive(Debug)]
pub enum PasswordError {
    Hash(bcrypt::BcryptError),
    Join(tokio::task::JoinError),
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::Hash(e) => write!(f, "hashing failed: {}", e),
            PasswordError::Join(e) => write!(f, "hashing task failed: {}", e),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Hash a password with bcrypt at the default cost
pub async fn hash_password(password: &str) -> Result<String, PasswordError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST).map_err(PasswordError::Hash))
        .await
        .map_err(PasswordError::Join)?
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    let password = password.to_owned();
    let hashed = hashed.to_owned();

    tokio::task::spawn_blocking(move || verify(password, &hashed).map_err(PasswordError::Hash))
        .await
        .map_err(PasswordError::Join)?
}
