//! Reply Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedReplyResponse, ApiResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// POST /threads/{thread_id}/comments/{comment_id}/replies
pub async fn add_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedReplyResponse>>), AppError> {
    let added_reply = state
        .reply_service
        .add_reply(&user.id, &thread_id, &comment_id, &payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReplyResponse { added_reply })),
    ))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .reply_service
        .delete_reply(&user.id, &thread_id, &comment_id, &reply_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}
