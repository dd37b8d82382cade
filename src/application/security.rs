//! Security collaborators used by the authentication use cases.
//!
//! Both traits are synchronous: hashing and token signing are CPU-bound and
//! never touch the network. Services run password hashing through
//! [`run_blocking`] so argon2 stays off the async worker threads.

use serde::{Deserialize, Serialize};
use tokio::task;

use crate::shared::error::AppError;

/// Identity carried inside access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

/// Password hashing and verification.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHash: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Fail with `Unauthorized` when the password does not match the hash.
    fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError>;
}

/// Issue and verify signed tokens.
#[cfg_attr(test, mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    /// Fail with `Unauthorized` for a bad or expired access token.
    fn verify_access_token(&self, token: &str) -> Result<TokenPayload, AppError>;

    /// Fail with `InvalidToken` for a bad or expired refresh token.
    fn verify_refresh_token(&self, token: &str) -> Result<TokenPayload, AppError>;
}

/// Run CPU-heavy work on the blocking thread pool.
pub async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Blocking task failed: {}", e)))?
}
