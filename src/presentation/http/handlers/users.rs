//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{AddedUserResponse, ApiResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// POST /users
pub async fn register_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedUserResponse>>), AppError> {
    let added_user = state.user_service.register(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedUserResponse { added_user })),
    ))
}
