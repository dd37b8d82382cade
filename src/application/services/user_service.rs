//! User Service
//!
//! Handles user registration.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::security::{run_blocking, PasswordHash};
use crate::domain::{AddedUser, RegisterUser, UserRepository, USERNAME_TAKEN};
use crate::infrastructure::metrics::{record_forum_event, ForumEvent};
use crate::shared::error::AppError;
use crate::shared::id_generator::{IdGenerator, IdKind};

/// User service trait for dependency injection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate the payload, hash the password and persist the user.
    async fn register(&self, payload: &Value) -> Result<AddedUser, AppError>;
}

/// UserService implementation
pub struct UserServiceImpl<U, H>
where
    U: UserRepository,
    H: PasswordHash,
{
    user_repo: Arc<U>,
    password_hash: Arc<H>,
    id_generator: Arc<IdGenerator>,
}

impl<U, H> UserServiceImpl<U, H>
where
    U: UserRepository,
    H: PasswordHash,
{
    pub fn new(user_repo: Arc<U>, password_hash: Arc<H>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            user_repo,
            password_hash,
            id_generator,
        }
    }
}

#[async_trait]
impl<U, H> UserService for UserServiceImpl<U, H>
where
    U: UserRepository + 'static,
    H: PasswordHash + 'static,
{
    async fn register(&self, payload: &Value) -> Result<AddedUser, AppError> {
        let register_user = RegisterUser::from_payload(payload)?;

        if self
            .user_repo
            .username_exists(&register_user.username)
            .await?
        {
            return Err(AppError::Conflict(USERNAME_TAKEN.into()));
        }

        let hasher = Arc::clone(&self.password_hash);
        let password = register_user.password.clone();
        let password_hash = run_blocking(move || hasher.hash(&password)).await?;
        let user = register_user.into_user(self.id_generator.generate(IdKind::User), password_hash);

        let added = self.user_repo.create(&user).await?;

        record_forum_event(ForumEvent::UserRegistered);
        tracing::info!(user_id = %added.id, username = %added.username, "User registered");
        Ok(added)
    }
}
