//! Registration and login handlers
//!
//! Thin glue over the users repository: Argon2id for password storage,
//! HS256 bearer tokens on login. Accounts start deactivated; activation
//! is provisioned out-of-band.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use core_kernel::UserId;
use infra_db::{NewUser, UsersRepository};

use crate::auth::{create_token, hash_password, normalize_phone_number, verify_password};
use crate::dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::error::ApiError;
use crate::AppState;

/// Registers a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let phone_number = match request.phone_number.as_deref() {
        Some(raw) => Some(normalize_phone_number(raw).ok_or_else(|| {
            ApiError::Validation("Unrecognized phone number format".to_string())
        })?),
        None => None,
    };

    let password_hash = hash_password(&request.password)?;

    let repository = UsersRepository::new(state.pool.clone());
    let user = repository
        .create(NewUser {
            name: request.name,
            email: request.email,
            phone_number,
            password_hash,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: UserId::new(user.id),
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            activated: user.activated,
        }),
    ))
}

/// Logs a user in and issues a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let repository = UsersRepository::new(state.pool.clone());

    let user = repository
        .find_by_email(&request.email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let stored_hash = user.password_hash.as_deref().ok_or(ApiError::Unauthorized)?;
    verify_password(&request.password, stored_hash)?;

    if !user.activated {
        return Err(ApiError::Forbidden("Account is not activated".to_string()));
    }

    let token = create_token(
        UserId::new(user.id),
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )?;

    Ok(Json(LoginResponse {
        token,
        expires_in_secs: state.config.jwt_expiration_secs,
    }))
}
