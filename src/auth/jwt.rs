//! Token issuance and verification
//!
//! Signed, expiring identity assertions presented on every protected
//! request, implemented with the jsonwebtoken crate (HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token verification errors
#[derive(Debug)]
pub enum TokenError {
    /// Token has expired
    Expired,

    /// Token is malformed or its signature does not verify
    Invalid(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Expired => write!(f, "token has expired"),
            TokenError::Invalid(msg) => write!(f, "invalid token: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}

/// Claims embedded in every issued token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id of the authenticated principal
    pub user_id: i64,

    /// Email bound to the principal at issuance time
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies signed identity tokens
///
/// Constructed once at startup from the configured secret and passed
/// into the app as shared state; there is no ambient signing key.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Issue a token binding the user id and email, expiring after the
    /// configured time to live
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user_id,
            email: email.to_owned(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

/// Strip the conventional "Bearer " prefix from an Authorization header
/// value. Raw tokens without the prefix are accepted as-is.
pub fn bearer_token(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer(secret: &str) -> TokenIssuer {
        TokenIssuer::new(secret, Duration::days(7))
    }

    #[test]
    fn issue_then_verify_returns_claims() {
        let issuer = issuer("test-secret");
        let token = issuer.issue(42, "ann@example.com").unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "ann@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("test-secret", Duration::days(-1));
        let token = issuer.issue(42, "ann@example.com").unwrap();

        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issuer("secret-one").issue(42, "ann@example.com").unwrap();

        let result = issuer("secret-two").verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = issuer("test-secret").verify("not-a-token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn bearer_prefix_is_stripped() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(bearer_token("abc.def.ghi"), "abc.def.ghi");
    }
}
