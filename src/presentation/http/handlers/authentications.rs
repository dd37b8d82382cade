//! Authentication Handlers
//!
//! Login, access token renewal and logout. None of these require a bearer
//! token; the refresh token travels in the body.

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{AccessTokenResponse, ApiResponse, AuthenticationResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// POST /authentications
pub async fn login(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AuthenticationResponse>>), AppError> {
    let tokens = state.auth_service.login(&payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(tokens))))
}

/// PUT /authentications
pub async fn refresh_access_token(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ApiResponse<AccessTokenResponse>>, AppError> {
    let access_token = state.auth_service.refresh_access_token(&payload).await?;

    Ok(Json(ApiResponse::success(AccessTokenResponse { access_token })))
}

/// DELETE /authentications
pub async fn logout(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.auth_service.logout(&payload).await?;

    Ok(Json(ApiResponse::empty()))
}
