//! Reply Repository Implementation
//!
//! PostgreSQL implementation of the ReplyRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddedReply, CommentReply, Reply, ReplyRepository, REPLY_NOT_FOUND};
use crate::shared::error::AppError;

/// Database row representation matching the replies table schema.
#[derive(Debug, sqlx::FromRow)]
struct ReplyRow {
    id: String,
    comment_id: String,
    content: String,
    date: DateTime<Utc>,
    owner: String,
    is_deleted: bool,
}

impl ReplyRow {
    fn into_reply(self) -> Reply {
        Reply {
            id: self.id,
            comment_id: self.comment_id,
            content: self.content,
            owner: self.owner,
            date: self.date,
            is_deleted: self.is_deleted,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddedReplyRow {
    id: String,
    content: String,
    owner: String,
}

/// Reply joined with its owner's username.
#[derive(Debug, sqlx::FromRow)]
struct CommentReplyRow {
    id: String,
    comment_id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
}

impl From<CommentReplyRow> for CommentReply {
    fn from(row: CommentReplyRow) -> Self {
        Self {
            id: row.id,
            comment_id: row.comment_id,
            username: row.username,
            date: row.date,
            content: row.content,
            is_deleted: row.is_deleted,
        }
    }
}

/// PostgreSQL reply repository implementation.
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    async fn add_reply(&self, reply: &Reply) -> Result<AddedReply, AppError> {
        let row = sqlx::query_as::<_, AddedReplyRow>(
            r#"
            INSERT INTO replies (id, comment_id, content, date, owner, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, content, owner
            "#,
        )
        .bind(&reply.id)
        .bind(&reply.comment_id)
        .bind(&reply.content)
        .bind(reply.date)
        .bind(&reply.owner)
        .bind(reply.is_deleted)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedReply::new(row.id, row.content, row.owner)?)
    }

    async fn verify_reply_exists(&self, reply_id: &str) -> Result<Reply, AppError> {
        let row = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT id, comment_id, content, date, owner, is_deleted
            FROM replies
            WHERE id = $1
            "#,
        )
        .bind(reply_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(REPLY_NOT_FOUND.to_string()))?;

        Ok(row.into_reply())
    }

    async fn soft_delete_reply_by_id(&self, reply_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_replies_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<CommentReply>, AppError> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CommentReplyRow>(
            r#"
            SELECT r.id, r.comment_id, u.username, r.date, r.content, r.is_deleted
            FROM replies r
            INNER JOIN users u ON r.owner = u.id
            WHERE r.comment_id = ANY($1)
            ORDER BY r.date ASC
            "#,
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentReply::from).collect())
    }
}
