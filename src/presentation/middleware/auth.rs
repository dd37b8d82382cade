//! Authentication Middleware
//!
//! Bearer token validation for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::infrastructure::security::MISSING_AUTHENTICATION;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
}

/// Authentication middleware that validates access tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Authorization(bearer) = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::Unauthorized(MISSING_AUTHENTICATION.into()))?;

    let payload = state.auth_service.verify_access_token(bearer.token())?;

    request.extensions_mut().insert(AuthUser {
        id: payload.id,
        username: payload.username,
    });

    Ok(next.run(request).await)
}
