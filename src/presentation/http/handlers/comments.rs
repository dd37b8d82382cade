//! Comment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedCommentResponse, ApiResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// POST /threads/{thread_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(thread_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedCommentResponse>>), AppError> {
    let added_comment = state
        .comment_service
        .add_comment(&user.id, &thread_id, &payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedCommentResponse { added_comment })),
    ))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .comment_service
        .delete_comment(&user.id, &thread_id, &comment_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}
