//! Comment Service
//!
//! Adds comments to threads and soft-deletes them on behalf of their owner.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::domain::{
    AddedComment, CommentRepository, NewComment, ThreadRepository, COMMENT_ACCESS_DENIED,
};
use crate::infrastructure::metrics::{record_forum_event, ForumEvent};
use crate::shared::error::AppError;
use crate::shared::id_generator::{IdGenerator, IdKind};

/// Comment service trait for dependency injection
#[async_trait]
pub trait CommentService: Send + Sync {
    async fn add_comment(
        &self,
        owner: &str,
        thread_id: &str,
        payload: &Value,
    ) -> Result<AddedComment, AppError>;

    /// Soft-delete a comment. Only its owner may do so.
    async fn delete_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError>;
}

/// CommentService implementation
pub struct CommentServiceImpl<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C> CommentServiceImpl<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(thread_repo: Arc<T>, comment_repo: Arc<C>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            thread_repo,
            comment_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<T, C> CommentService for CommentServiceImpl<T, C>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
{
    async fn add_comment(
        &self,
        owner: &str,
        thread_id: &str,
        payload: &Value,
    ) -> Result<AddedComment, AppError> {
        let new_comment = NewComment::new(owner, thread_id, payload)?;

        self.thread_repo.verify_thread_exists(thread_id).await?;

        let comment =
            new_comment.into_comment(self.id_generator.generate(IdKind::Comment), Utc::now());
        let added = self.comment_repo.add_comment(&comment).await?;

        record_forum_event(ForumEvent::CommentAdded);
        tracing::info!(comment_id = %added.id, thread_id = %thread_id, "Comment added");
        Ok(added)
    }

    async fn delete_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError> {
        self.thread_repo.verify_thread_exists(thread_id).await?;

        let comment = self.comment_repo.verify_comment_exists(comment_id).await?;
        if !comment.is_owned_by(user_id) {
            return Err(AppError::Forbidden(COMMENT_ACCESS_DENIED.into()));
        }

        self.comment_repo.soft_delete_comment_by_id(comment_id).await?;

        record_forum_event(ForumEvent::CommentDeleted);
        tracing::info!(comment_id = %comment_id, user_id = %user_id, "Comment soft-deleted");
        Ok(())
    }
}
