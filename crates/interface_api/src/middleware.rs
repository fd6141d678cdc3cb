//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use infra_db::UsersRepository;

use crate::auth::{subject_user_id, validate_token, AuthenticatedUser};
use crate::AppState;

/// Authentication middleware
///
/// Validates the bearer token, then confirms the token's subject is
/// still a live, activated account before attaching the caller identity
/// to the request. A token that no longer maps to an authorized user is
/// a 403, not a 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            warn!("Missing or invalid Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    let claims = match validate_token(token, &state.config.jwt_secret) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("Token validation failed: {:?}", e);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    let user_id = subject_user_id(&claims).map_err(|_| StatusCode::UNAUTHORIZED)?;

    let users = UsersRepository::new(state.pool.clone());
    match users.find_active_by_id(user_id).await {
        Ok(Some(_)) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser { user_id });
            Ok(next.run(request).await)
        }
        Ok(None) => {
            warn!(user_id = %user_id, "Token subject is no longer authorized");
            Err(StatusCode::FORBIDDEN)
        }
        Err(e) => {
            warn!("User lookup failed during authentication: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Audit logging middleware
///
/// Logs every API request with its caller for compliance and debugging
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let caller = request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| user.user_id.to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        caller = %caller,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
