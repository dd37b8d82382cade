//! Like Repository Implementation
//!
//! PostgreSQL implementation of the LikeRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Like, LikeCount, LikeRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct LikeCountRow {
    comment_id: String,
    count: i64,
}

/// PostgreSQL like repository implementation.
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn add_like(&self, like: &Like) -> Result<(), AppError> {
        sqlx::query("INSERT INTO likes (id, comment_id, user_id) VALUES ($1, $2, $3)")
            .bind(&like.id)
            .bind(&like.comment_id)
            .bind(&like.user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_like(&self, comment_id: &str, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM likes WHERE comment_id = $1 AND user_id = $2")
            .bind(comment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn is_liked(&self, comment_id: &str, user_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE comment_id = $1 AND user_id = $2)",
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn count_likes_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<LikeCount>, AppError> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, LikeCountRow>(
            r#"
            SELECT comment_id, COUNT(*) AS count
            FROM likes
            WHERE comment_id = ANY($1)
            GROUP BY comment_id
            "#,
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| LikeCount {
                comment_id: row.comment_id,
                count: row.count,
            })
            .collect())
    }
}
