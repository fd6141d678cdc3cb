//! Authentication primitives
//!
//! JWT issuance/validation for bearer tokens, Argon2id password hashing,
//! and normalization of the phone numbers users type at registration.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use core_kernel::UserId;

/// JWT claims carried by a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Token id
    pub jti: Uuid,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// The caller identity attached to a request by the auth middleware
///
/// Handlers take this as an explicit extension and thread it into the
/// adjudicator; nothing downstream reads ambient request state.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// Creates a new JWT for the given user
pub fn create_token(
    user_id: UserId,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user_id.get().to_string(),
        jti: Uuid::new_v4(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT and returns its claims
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Parses a token subject into a user id
pub fn subject_user_id(claims: &Claims) -> Result<UserId, AuthError> {
    claims
        .sub
        .parse::<i32>()
        .map(UserId::new)
        .map_err(|_| AuthError::InvalidToken)
}

/// Hashes a password with Argon2id and a fresh salt
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Verifies a password against a stored Argon2 hash
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Normalizes a Kenyan mobile number to international format
///
/// Local numbers (`07…`) become `+2547…`; numbers already in `+254` form
/// keep it. Spaces are stripped either way. Anything else is not a
/// format this system accepts.
pub fn normalize_phone_number(phone_number: &str) -> Option<String> {
    if let Some(rest) = phone_number.strip_prefix('0') {
        Some(format!("+254{}", rest).replace(' ', ""))
    } else if phone_number.starts_with("+254") {
        Some(phone_number.replace(' ', ""))
    } else {
        None
    }
}
