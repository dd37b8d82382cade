//! Like Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::ApiResponse;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// PUT /threads/{thread_id}/comments/{comment_id}/likes
///
/// Toggles the like; the response is the same either way.
pub async fn toggle_comment_like(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .like_service
        .toggle_like(&user.id, &thread_id, &comment_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}
