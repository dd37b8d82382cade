//! Authentication Service
//!
//! Handles login, access token renewal and logout. Refresh tokens are
//! persisted as SHA-256 digests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::application::security::{
    run_blocking, AuthenticationTokenManager, PasswordHash, TokenPayload,
};
use crate::domain::{
    AuthenticationRepository, NewAuthentication, RefreshTokenPayload, UserLogin, UserRepository,
};
use crate::infrastructure::metrics::{record_forum_event, ForumEvent};
use crate::shared::error::AppError;

pub const USERNAME_NOT_FOUND: &str = "username tidak ditemukan";

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue an access/refresh token pair.
    async fn login(&self, payload: &Value) -> Result<NewAuthentication, AppError>;

    /// Issue a new access token for a stored refresh token.
    async fn refresh_access_token(&self, payload: &Value) -> Result<String, AppError>;

    /// Revoke a stored refresh token.
    async fn logout(&self, payload: &Value) -> Result<(), AppError>;

    /// Validate an access token and extract the caller's identity.
    fn verify_access_token(&self, access_token: &str) -> Result<TokenPayload, AppError>;
}

/// AuthService implementation
pub struct AuthServiceImpl<U, A, H, M>
where
    U: UserRepository,
    A: AuthenticationRepository,
    H: PasswordHash,
    M: AuthenticationTokenManager,
{
    user_repo: Arc<U>,
    auth_repo: Arc<A>,
    password_hash: Arc<H>,
    token_manager: Arc<M>,
}

impl<U, A, H, M> AuthServiceImpl<U, A, H, M>
where
    U: UserRepository,
    A: AuthenticationRepository,
    H: PasswordHash,
    M: AuthenticationTokenManager,
{
    /// Create a new AuthServiceImpl
    pub fn new(
        user_repo: Arc<U>,
        auth_repo: Arc<A>,
        password_hash: Arc<H>,
        token_manager: Arc<M>,
    ) -> Self {
        Self {
            user_repo,
            auth_repo,
            password_hash,
            token_manager,
        }
    }

    /// Hash refresh token for storage
    fn hash_refresh_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl<U, A, H, M> AuthService for AuthServiceImpl<U, A, H, M>
where
    U: UserRepository + 'static,
    A: AuthenticationRepository + 'static,
    H: PasswordHash + 'static,
    M: AuthenticationTokenManager + 'static,
{
    async fn login(&self, payload: &Value) -> Result<NewAuthentication, AppError> {
        let login = UserLogin::from_payload(payload)?;

        let user = self
            .user_repo
            .find_by_username(&login.username)
            .await?
            .ok_or_else(|| AppError::InvalidPayload(USERNAME_NOT_FOUND.into()))?;

        let hasher = Arc::clone(&self.password_hash);
        let password = login.password.clone();
        let hashed = user.password.clone();
        run_blocking(move || hasher.compare_password(&password, &hashed)).await?;

        let token_payload = TokenPayload {
            id: user.id,
            username: user.username,
        };
        let access_token = self.token_manager.create_access_token(&token_payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&token_payload)?;

        self.auth_repo
            .add_token(&self.hash_refresh_token(&refresh_token))
            .await?;

        record_forum_event(ForumEvent::LoggedIn);
        tracing::info!(user_id = %token_payload.id, "User logged in");

        Ok(NewAuthentication::new(access_token, refresh_token)?)
    }

    async fn refresh_access_token(&self, payload: &Value) -> Result<String, AppError> {
        let RefreshTokenPayload { refresh_token } = RefreshTokenPayload::from_payload(payload)?;

        let token_payload = self.token_manager.verify_refresh_token(&refresh_token)?;
        self.auth_repo
            .verify_token_exists(&self.hash_refresh_token(&refresh_token))
            .await?;

        let access_token = self.token_manager.create_access_token(&token_payload)?;

        record_forum_event(ForumEvent::TokenRefreshed);
        tracing::debug!(user_id = %token_payload.id, "Access token refreshed");
        Ok(access_token)
    }

    async fn logout(&self, payload: &Value) -> Result<(), AppError> {
        let RefreshTokenPayload { refresh_token } = RefreshTokenPayload::from_payload(payload)?;

        let token_hash = self.hash_refresh_token(&refresh_token);
        self.auth_repo.verify_token_exists(&token_hash).await?;
        self.auth_repo.delete_token(&token_hash).await?;

        record_forum_event(ForumEvent::LoggedOut);
        tracing::debug!("Refresh token revoked");
        Ok(())
    }

    fn verify_access_token(&self, access_token: &str) -> Result<TokenPayload, AppError> {
        self.token_manager.verify_access_token(access_token)
    }
}
