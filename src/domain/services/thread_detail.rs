//! Thread detail assembly domain service.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::{
    CommentReply, GetComment, GetReply, GetThread, LikeCount, ThreadComment,
};
use crate::domain::errors::PayloadError;

/// A thread with its comments, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    #[serde(flatten)]
    pub thread: GetThread,

    /// Absent when the thread has no comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentDetail>>,
}

/// A comment on the thread detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    #[serde(flatten)]
    pub comment: GetComment,

    #[serde(rename = "likeCount")]
    pub like_count: i64,

    /// Absent when nobody replied to the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<GetReply>>,
}

/// Domain service merging a thread with its comments, replies and likes.
pub struct ThreadDetailAssembler;

impl ThreadDetailAssembler {
    /// Build the nested thread detail.
    ///
    /// `comments` and `replies` are expected oldest first; their order is kept.
    /// Deleted comments and replies have their content replaced by a
    /// placeholder. Replies whose comment is not in `comments` are dropped.
    pub fn assemble(
        thread: GetThread,
        comments: Vec<ThreadComment>,
        replies: Vec<CommentReply>,
        like_counts: Vec<LikeCount>,
    ) -> Result<ThreadDetail, PayloadError> {
        if comments.is_empty() {
            return Ok(ThreadDetail {
                thread,
                comments: None,
            });
        }

        let mut replies_by_comment: HashMap<String, Vec<GetReply>> = HashMap::new();
        for reply in replies {
            let comment_id = reply.comment_id.clone();
            let reply = GetReply::from_comment_reply(reply)?;
            replies_by_comment.entry(comment_id).or_default().push(reply);
        }

        let likes_by_comment: HashMap<String, i64> = like_counts
            .into_iter()
            .map(|like| (like.comment_id, like.count))
            .collect();

        let comments = comments
            .into_iter()
            .map(|comment| {
                let like_count = likes_by_comment.get(&comment.id).copied().unwrap_or(0);
                let replies = replies_by_comment.remove(&comment.id);
                Ok(CommentDetail {
                    comment: GetComment::from_thread_comment(comment)?,
                    like_count,
                    replies,
                })
            })
            .collect::<Result<Vec<_>, PayloadError>>()?;

        Ok(ThreadDetail {
            thread,
            comments: Some(comments),
        })
    }
}
