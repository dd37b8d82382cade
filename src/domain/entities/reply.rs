//! Reply entity and repository trait.
//!
//! Maps to the `replies` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::ensure_present;
use crate::domain::errors::{PayloadEntity, PayloadError};
use crate::shared::error::AppError;
use crate::shared::validation::PayloadFields;

/// Content shown in place of a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

pub const REPLY_NOT_FOUND: &str = "balasan tidak ditemukan";

pub const REPLY_ACCESS_DENIED: &str = "anda tidak memiliki hak akses untuk balasan ini";

/// Validated payload for replying to a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub comment_id: String,
    pub content: String,
    pub owner: String,
}

impl NewReply {
    pub fn new(owner: &str, comment_id: &str, payload: &Value) -> Result<Self, PayloadError> {
        let [content] = PayloadFields::new(payload)
            .require_strings(["content"])
            .map_err(|v| PayloadError::from_violation(PayloadEntity::NewReply, v))?;

        Ok(Self {
            comment_id: comment_id.to_string(),
            content: content.to_string(),
            owner: owner.to_string(),
        })
    }

    pub fn into_reply(self, id: String, date: DateTime<Utc>) -> Reply {
        Reply {
            id,
            comment_id: self.comment_id,
            content: self.content,
            owner: self.owner,
            date,
            is_deleted: false,
        }
    }
}

/// A reply row.
///
/// Maps to the `replies` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - comment_id: VARCHAR(50) NOT NULL REFERENCES comments(id) ON DELETE CASCADE
/// - content: TEXT NOT NULL
/// - date: TIMESTAMPTZ NOT NULL
/// - owner: VARCHAR(50) NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// - is_deleted: BOOLEAN NOT NULL DEFAULT FALSE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: String,
    pub comment_id: String,
    pub content: String,
    pub owner: String,
    pub date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Reply {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner == user_id
    }
}

/// Projection returned after a reply is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    pub fn new(id: String, content: String, owner: String) -> Result<Self, PayloadError> {
        ensure_present(PayloadEntity::AddedReply, &[&id, &content, &owner])?;
        Ok(Self { id, content, owner })
    }
}

/// Reply joined with its owner's username and parent comment id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReply {
    pub id: String,
    pub comment_id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

/// Reply as shown under a comment on the thread detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetReply {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl GetReply {
    /// Build the display form, masking the content of a deleted reply.
    pub fn from_comment_reply(reply: CommentReply) -> Result<Self, PayloadError> {
        ensure_present(
            PayloadEntity::GetReply,
            &[&reply.id, &reply.username, &reply.content],
        )?;

        let content = if reply.is_deleted {
            DELETED_REPLY_CONTENT.to_string()
        } else {
            reply.content
        };

        Ok(Self {
            id: reply.id,
            content,
            date: reply.date,
            username: reply.username,
        })
    }
}

/// Repository trait for Reply data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: &Reply) -> Result<AddedReply, AppError>;

    /// Load a reply or fail with `NotFound`.
    async fn verify_reply_exists(&self, reply_id: &str) -> Result<Reply, AppError>;

    /// Mark a reply deleted. Repeating the call is harmless.
    async fn soft_delete_reply_by_id(&self, reply_id: &str) -> Result<(), AppError>;

    /// Replies of any of the given comments, oldest first.
    async fn find_replies_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<CommentReply>, AppError>;
}
