//! Comment entity and repository trait.
//!
//! Maps to the `comments` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::ensure_present;
use crate::domain::errors::{PayloadEntity, PayloadError};
use crate::shared::error::AppError;
use crate::shared::validation::PayloadFields;

/// Content shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

pub const COMMENT_NOT_FOUND: &str = "komentar tidak ditemukan";

pub const COMMENT_ACCESS_DENIED: &str = "anda tidak memiliki hak akses untuk komentar ini";

/// Validated payload for commenting on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub thread_id: String,
    pub content: String,
    pub owner: String,
}

impl NewComment {
    pub fn new(owner: &str, thread_id: &str, payload: &Value) -> Result<Self, PayloadError> {
        let [content] = PayloadFields::new(payload)
            .require_strings(["content"])
            .map_err(|v| PayloadError::from_violation(PayloadEntity::NewComment, v))?;

        Ok(Self {
            thread_id: thread_id.to_string(),
            content: content.to_string(),
            owner: owner.to_string(),
        })
    }

    pub fn into_comment(self, id: String, date: DateTime<Utc>) -> Comment {
        Comment {
            id,
            thread_id: self.thread_id,
            content: self.content,
            owner: self.owner,
            date,
            is_deleted: false,
        }
    }
}

/// A comment row.
///
/// Maps to the `comments` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - thread_id: VARCHAR(50) NOT NULL REFERENCES threads(id) ON DELETE CASCADE
/// - content: TEXT NOT NULL
/// - date: TIMESTAMPTZ NOT NULL
/// - owner: VARCHAR(50) NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// - is_deleted: BOOLEAN NOT NULL DEFAULT FALSE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub thread_id: String,
    pub content: String,
    pub owner: String,
    pub date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Comment {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner == user_id
    }
}

/// Projection returned after a comment is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(id: String, content: String, owner: String) -> Result<Self, PayloadError> {
        ensure_present(PayloadEntity::AddedComment, &[&id, &content, &owner])?;
        Ok(Self { id, content, owner })
    }
}

/// Comment of a thread joined with its owner's username, as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

/// Comment as shown on the thread detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl GetComment {
    /// Build the display form, masking the content of a deleted comment.
    pub fn from_thread_comment(comment: ThreadComment) -> Result<Self, PayloadError> {
        ensure_present(
            PayloadEntity::GetComment,
            &[&comment.id, &comment.username, &comment.content],
        )?;

        let content = if comment.is_deleted {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            comment.content
        };

        Ok(Self {
            id: comment.id,
            username: comment.username,
            date: comment.date,
            content,
        })
    }
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: &Comment) -> Result<AddedComment, AppError>;

    /// Load a comment or fail with `NotFound`.
    async fn verify_comment_exists(&self, comment_id: &str) -> Result<Comment, AppError>;

    /// Mark a comment deleted. Repeating the call is harmless.
    async fn soft_delete_comment_by_id(&self, comment_id: &str) -> Result<(), AppError>;

    /// All comments of a thread, oldest first.
    async fn find_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<ThreadComment>, AppError>;
}
