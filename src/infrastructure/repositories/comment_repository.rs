//! Comment Repository Implementation
//!
//! PostgreSQL implementation of the CommentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    AddedComment, Comment, CommentRepository, ThreadComment, COMMENT_NOT_FOUND,
};
use crate::shared::error::AppError;

/// Database row representation matching the comments table schema.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: String,
    thread_id: String,
    content: String,
    date: DateTime<Utc>,
    owner: String,
    is_deleted: bool,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            thread_id: self.thread_id,
            content: self.content,
            owner: self.owner,
            date: self.date,
            is_deleted: self.is_deleted,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddedCommentRow {
    id: String,
    content: String,
    owner: String,
}

/// Comment joined with its owner's username.
#[derive(Debug, sqlx::FromRow)]
struct ThreadCommentRow {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
}

impl From<ThreadCommentRow> for ThreadComment {
    fn from(row: ThreadCommentRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            date: row.date,
            content: row.content,
            is_deleted: row.is_deleted,
        }
    }
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, comment: &Comment) -> Result<AddedComment, AppError> {
        let row = sqlx::query_as::<_, AddedCommentRow>(
            r#"
            INSERT INTO comments (id, thread_id, content, date, owner, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, content, owner
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.thread_id)
        .bind(&comment.content)
        .bind(comment.date)
        .bind(&comment.owner)
        .bind(comment.is_deleted)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedComment::new(row.id, row.content, row.owner)?)
    }

    async fn verify_comment_exists(&self, comment_id: &str) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, thread_id, content, date, owner, is_deleted
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        Ok(row.into_comment())
    }

    async fn soft_delete_comment_by_id(&self, comment_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<ThreadComment>, AppError> {
        let rows = sqlx::query_as::<_, ThreadCommentRow>(
            r#"
            SELECT c.id, u.username, c.date, c.content, c.is_deleted
            FROM comments c
            INNER JOIN users u ON c.owner = u.id
            WHERE c.thread_id = $1
            ORDER BY c.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ThreadComment::from).collect())
    }
}
