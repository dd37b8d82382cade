//! Response DTOs
//!
//! Data structures for API response bodies. Every successful response uses
//! the `{ "status": "success", "data": ... }` envelope; `data` is omitted for
//! operations that return nothing.

use serde::Serialize;

use crate::domain::services::ThreadDetail;
use crate::domain::{AddedComment, AddedReply, AddedThread, AddedUser, NewAuthentication};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a `data` field.
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

/// Registration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserResponse {
    pub added_user: AddedUser,
}

/// Login response
pub type AuthenticationResponse = NewAuthentication;

/// Access token renewal response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadResponse {
    pub added_thread: AddedThread,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentResponse {
    pub added_comment: AddedComment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyResponse {
    pub added_reply: AddedReply,
}

/// Thread detail response
#[derive(Debug, Serialize)]
pub struct ThreadDetailResponse {
    pub thread: ThreadDetail,
}
