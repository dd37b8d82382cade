//! Like Service
//!
//! Toggles a user's like on a comment.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CommentRepository, Like, LikeRepository, ThreadRepository};
use crate::infrastructure::metrics::{record_forum_event, ForumEvent};
use crate::shared::error::AppError;
use crate::shared::id_generator::{IdGenerator, IdKind};

/// Like service trait for dependency injection
#[async_trait]
pub trait LikeService: Send + Sync {
    /// Like the comment, or remove the like if the user already gave one.
    ///
    /// Returns whether the comment is liked afterwards.
    async fn toggle_like(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<bool, AppError>;
}

/// LikeService implementation
pub struct LikeServiceImpl<T, C, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    like_repo: Arc<L>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C, L> LikeServiceImpl<T, C, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    pub fn new(
        thread_repo: Arc<T>,
        comment_repo: Arc<C>,
        like_repo: Arc<L>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            like_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<T, C, L> LikeService for LikeServiceImpl<T, C, L>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    L: LikeRepository + 'static,
{
    async fn toggle_like(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<bool, AppError> {
        self.thread_repo.verify_thread_exists(thread_id).await?;
        self.comment_repo.verify_comment_exists(comment_id).await?;

        // Check-then-act: two concurrent toggles by the same user can race.
        if self.like_repo.is_liked(comment_id, user_id).await? {
            self.like_repo.delete_like(comment_id, user_id).await?;
            record_forum_event(ForumEvent::CommentUnliked);
            tracing::debug!(comment_id = %comment_id, user_id = %user_id, "Like removed");
            return Ok(false);
        }

        let like = Like {
            id: self.id_generator.generate(IdKind::Like),
            comment_id: comment_id.to_string(),
            user_id: user_id.to_string(),
        };
        self.like_repo.add_like(&like).await?;

        record_forum_event(ForumEvent::CommentLiked);
        tracing::debug!(comment_id = %comment_id, user_id = %user_id, "Like added");
        Ok(true)
    }
}
