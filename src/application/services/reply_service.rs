//! Reply Service
//!
//! Adds replies to comments and soft-deletes them on behalf of their owner.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::domain::{
    AddedReply, CommentRepository, NewReply, ReplyRepository, ThreadRepository,
    REPLY_ACCESS_DENIED,
};
use crate::infrastructure::metrics::{record_forum_event, ForumEvent};
use crate::shared::error::AppError;
use crate::shared::id_generator::{IdGenerator, IdKind};

/// Reply service trait for dependency injection
#[async_trait]
pub trait ReplyService: Send + Sync {
    async fn add_reply(
        &self,
        owner: &str,
        thread_id: &str,
        comment_id: &str,
        payload: &Value,
    ) -> Result<AddedReply, AppError>;

    /// Soft-delete a reply. Only its owner may do so.
    async fn delete_reply(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<(), AppError>;
}

/// ReplyService implementation
pub struct ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    reply_repo: Arc<R>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C, R> ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    pub fn new(
        thread_repo: Arc<T>,
        comment_repo: Arc<C>,
        reply_repo: Arc<R>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            id_generator,
        }
    }

    /// Thread first, then comment. The comment is not checked against the thread.
    async fn verify_scope(&self, thread_id: &str, comment_id: &str) -> Result<(), AppError> {
        self.thread_repo.verify_thread_exists(thread_id).await?;
        self.comment_repo.verify_comment_exists(comment_id).await?;
        Ok(())
    }
}

#[async_trait]
impl<T, C, R> ReplyService for ReplyServiceImpl<T, C, R>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
{
    async fn add_reply(
        &self,
        owner: &str,
        thread_id: &str,
        comment_id: &str,
        payload: &Value,
    ) -> Result<AddedReply, AppError> {
        let new_reply = NewReply::new(owner, comment_id, payload)?;

        self.verify_scope(thread_id, comment_id).await?;

        let reply = new_reply.into_reply(self.id_generator.generate(IdKind::Reply), Utc::now());
        let added = self.reply_repo.add_reply(&reply).await?;

        record_forum_event(ForumEvent::ReplyAdded);
        tracing::info!(reply_id = %added.id, comment_id = %comment_id, "Reply added");
        Ok(added)
    }

    async fn delete_reply(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<(), AppError> {
        self.verify_scope(thread_id, comment_id).await?;

        let reply = self.reply_repo.verify_reply_exists(reply_id).await?;
        if !reply.is_owned_by(user_id) {
            return Err(AppError::Forbidden(REPLY_ACCESS_DENIED.into()));
        }

        self.reply_repo.soft_delete_reply_by_id(reply_id).await?;

        record_forum_event(ForumEvent::ReplyDeleted);
        tracing::info!(reply_id = %reply_id, user_id = %user_id, "Reply soft-deleted");
        Ok(())
    }
}
