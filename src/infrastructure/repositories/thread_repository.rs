//! Thread Repository Implementation
//!
//! PostgreSQL implementation of the ThreadRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddedThread, GetThread, Thread, ThreadRepository, THREAD_NOT_FOUND};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct AddedThreadRow {
    id: String,
    title: String,
    owner: String,
}

/// Thread joined with the owner's username.
#[derive(Debug, sqlx::FromRow)]
struct ThreadDetailRow {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: String,
}

/// PostgreSQL thread repository implementation.
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, thread: &Thread) -> Result<AddedThread, AppError> {
        let row = sqlx::query_as::<_, AddedThreadRow>(
            r#"
            INSERT INTO threads (id, title, body, date, owner)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, owner
            "#,
        )
        .bind(&thread.id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.date)
        .bind(&thread.owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedThread::new(row.id, row.title, row.owner)?)
    }

    async fn verify_thread_exists(&self, thread_id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)",
        )
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(THREAD_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn find_thread_by_id(&self, thread_id: &str) -> Result<GetThread, AppError> {
        let row = sqlx::query_as::<_, ThreadDetailRow>(
            r#"
            SELECT t.id, t.title, t.body, t.date, u.username
            FROM threads t
            INNER JOIN users u ON t.owner = u.id
            WHERE t.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(THREAD_NOT_FOUND.to_string()))?;

        Ok(GetThread::new(
            row.id,
            row.title,
            row.body,
            row.date,
            row.username,
        )?)
    }
}
