//! Authentication Repository Implementation
//!
//! PostgreSQL implementation of the AuthenticationRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{AuthenticationRepository, REFRESH_TOKEN_NOT_FOUND};
use crate::shared::error::AppError;

/// PostgreSQL refresh token store.
#[derive(Clone)]
pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    /// Create a new PgAuthenticationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    async fn add_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn verify_token_exists(&self, token: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authentications WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::InvalidToken(REFRESH_TOKEN_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn delete_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
