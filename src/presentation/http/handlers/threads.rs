//! Thread Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedThreadResponse, ApiResponse, ThreadDetailResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// POST /threads
pub async fn add_thread(
    State(state): State<AppState>,
    user: AuthUser,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedThreadResponse>>), AppError> {
    let added_thread = state.thread_service.add_thread(&user.id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThreadResponse { added_thread })),
    ))
}

/// GET /threads/{thread_id}
pub async fn get_thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<ApiResponse<ThreadDetailResponse>>, AppError> {
    let thread = state.thread_service.get_thread_detail(&thread_id).await?;

    Ok(Json(ApiResponse::success(ThreadDetailResponse { thread })))
}
