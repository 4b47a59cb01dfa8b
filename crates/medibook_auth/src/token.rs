// --- File: crates/medibook_auth/src/token.rs ---
//! Session token signing and verification.
//!
//! Tokens are HS256 JWTs binding a verified email claim. The signing secret
//! comes from configuration (`ACCESS_TOKEN_SECRET`); the algorithm is an
//! internal detail of this module.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No credential presented")]
    MissingCredential,
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
    #[error("Token signing secret is not configured")]
    MissingSecret,
    #[error("Failed to encode token: {0}")]
    EncodingError(String),
}

/// The identity claim carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The verified email this token is bound to
    pub email: String,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: usize,
    /// Issued-at timestamp (Unix epoch seconds)
    pub iat: usize,
}

/// Signs a token bound to `email`, valid for `expiry_secs` seconds.
pub fn issue_token(email: &str, secret: &str, expiry_secs: i64) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        email: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::seconds(expiry_secs)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AuthError::EncodingError(e.to_string()))
}

/// Verifies a token's signature and expiry, returning the decoded claim.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidCredential(e.to_string()))
}
