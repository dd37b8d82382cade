//! Like entity and repository trait.
//!
//! Maps to the `likes` table in the database schema.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// A user's like on a comment.
///
/// Maps to the `likes` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - comment_id: VARCHAR(50) NOT NULL REFERENCES comments(id) ON DELETE CASCADE
/// - user_id: VARCHAR(50) NOT NULL REFERENCES users(id) ON DELETE CASCADE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: String,
    pub comment_id: String,
    pub user_id: String,
}

/// Number of likes on one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeCount {
    pub comment_id: String,
    pub count: i64,
}

/// Repository trait for Like data access operations.
///
/// There is no uniqueness constraint on `(comment_id, user_id)`; callers
/// check [`is_liked`](LikeRepository::is_liked) before inserting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn add_like(&self, like: &Like) -> Result<(), AppError>;

    async fn delete_like(&self, comment_id: &str, user_id: &str) -> Result<(), AppError>;

    async fn is_liked(&self, comment_id: &str, user_id: &str) -> Result<bool, AppError>;

    /// Like counts for the given comments. Comments without likes are omitted.
    async fn count_likes_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<LikeCount>, AppError>;
}
