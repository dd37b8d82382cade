//! Thread Service
//!
//! Creates threads and assembles the thread detail view.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::domain::services::{ThreadDetail, ThreadDetailAssembler};
use crate::domain::{
    AddedThread, CommentRepository, LikeRepository, NewThread, ReplyRepository, ThreadRepository,
};
use crate::infrastructure::metrics::{record_forum_event, ForumEvent};
use crate::shared::error::AppError;
use crate::shared::id_generator::{IdGenerator, IdKind};

/// Thread service trait for dependency injection
#[async_trait]
pub trait ThreadService: Send + Sync {
    /// Validate the payload and create a thread owned by `owner`.
    async fn add_thread(&self, owner: &str, payload: &Value) -> Result<AddedThread, AppError>;

    /// Load a thread with its comments, replies and like counts.
    async fn get_thread_detail(&self, thread_id: &str) -> Result<ThreadDetail, AppError>;
}

/// ThreadService implementation
pub struct ThreadServiceImpl<T, C, R, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
    L: LikeRepository,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
    reply_repo: Arc<R>,
    like_repo: Arc<L>,
    id_generator: Arc<IdGenerator>,
}

impl<T, C, R, L> ThreadServiceImpl<T, C, R, L>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
    L: LikeRepository,
{
    pub fn new(
        thread_repo: Arc<T>,
        comment_repo: Arc<C>,
        reply_repo: Arc<R>,
        like_repo: Arc<L>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            like_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<T, C, R, L> ThreadService for ThreadServiceImpl<T, C, R, L>
where
    T: ThreadRepository + 'static,
    C: CommentRepository + 'static,
    R: ReplyRepository + 'static,
    L: LikeRepository + 'static,
{
    async fn add_thread(&self, owner: &str, payload: &Value) -> Result<AddedThread, AppError> {
        let new_thread = NewThread::new(owner, payload)?;

        let thread = new_thread.into_thread(self.id_generator.generate(IdKind::Thread), Utc::now());
        let added = self.thread_repo.add_thread(&thread).await?;

        record_forum_event(ForumEvent::ThreadCreated);
        tracing::info!(thread_id = %added.id, owner = %added.owner, "Thread created");
        Ok(added)
    }

    async fn get_thread_detail(&self, thread_id: &str) -> Result<ThreadDetail, AppError> {
        let thread = self.thread_repo.find_thread_by_id(thread_id).await?;
        let comments = self.comment_repo.find_comments_by_thread_id(thread_id).await?;

        let (replies, like_counts) = if comments.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            let comment_ids: Vec<String> = comments.iter().map(|c| c.id.clone()).collect();
            let replies = self.reply_repo.find_replies_by_comment_ids(&comment_ids).await?;
            let like_counts = self.like_repo.count_likes_by_comment_ids(&comment_ids).await?;
            (replies, like_counts)
        };

        tracing::debug!(
            thread_id = %thread_id,
            comments = comments.len(),
            replies = replies.len(),
            "Assembling thread detail"
        );

        Ok(ThreadDetailAssembler::assemble(
            thread,
            comments,
            replies,
            like_counts,
        )?)
    }
}
