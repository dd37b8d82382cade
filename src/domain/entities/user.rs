//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use std::borrow::Cow;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use super::ensure_present;
use crate::domain::errors::{PayloadEntity, PayloadError};
use crate::shared::error::AppError;
use crate::shared::validation::{validation_message, PayloadFields};

pub const USERNAME_TAKEN: &str = "username tidak tersedia";

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - username: VARCHAR(50) NOT NULL UNIQUE
/// - password: TEXT NOT NULL (Argon2 hash)
/// - fullname: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    pub username: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password: String,

    pub fullname: String,
}

/// Validated registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterUser {
    #[validate(
        length(
            max = 50,
            message = "tidak dapat membuat user baru karena karakter username melebihi batas limit"
        ),
        custom(function = "validate_username_characters")
    )]
    pub username: String,

    pub password: String,

    pub fullname: String,
}

fn validate_username_characters(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Ok(());
    }

    let mut err = ValidationError::new("username_characters");
    err.message = Some(Cow::Borrowed(
        "tidak dapat membuat user baru karena username mengandung karakter terlarang",
    ));
    Err(err)
}

impl RegisterUser {
    /// Build from a raw request payload.
    ///
    /// Checks presence, then types, then the username rules.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [username, password, fullname] = PayloadFields::new(payload)
            .require_strings(["username", "password", "fullname"])
            .map_err(|v| PayloadError::from_violation(PayloadEntity::RegisterUser, v))?;

        let register_user = Self {
            username: username.to_string(),
            password: password.to_string(),
            fullname: fullname.to_string(),
        };

        register_user.validate().map_err(|errors| {
            PayloadError::Rule(PayloadEntity::RegisterUser, validation_message(&errors))
        })?;

        Ok(register_user)
    }

    /// Attach the generated id and the hashed password.
    pub fn into_user(self, id: String, password_hash: String) -> User {
        User {
            id,
            username: self.username,
            password: password_hash,
            fullname: self.fullname,
        }
    }
}

/// Projection returned after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl AddedUser {
    pub fn new(id: String, username: String, fullname: String) -> Result<Self, PayloadError> {
        ensure_present(PayloadEntity::AddedUser, &[&id, &username, &fullname])?;
        Ok(Self {
            id,
            username,
            fullname,
        })
    }
}

/// Validated login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [username, password] = PayloadFields::new(payload)
            .require_strings(["username", "password"])
            .map_err(|v| PayloadError::from_violation(PayloadEntity::UserLogin, v))?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check if a username is already taken.
    async fn username_exists(&self, username: &str) -> Result<bool, AppError>;

    /// Persist a new user and return its public projection.
    async fn create(&self, user: &User) -> Result<AddedUser, AppError>;

    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}
