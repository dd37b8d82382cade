//! Authentication entity and repository trait.
//!
//! Maps to the `authentications` table, which holds the digests of refresh
//! tokens that have been issued and not yet revoked.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::ensure_present;
use crate::domain::errors::{PayloadEntity, PayloadError};
use crate::shared::error::AppError;
use crate::shared::validation::PayloadFields;

pub const REFRESH_TOKEN_NOT_FOUND: &str = "refresh token tidak ditemukan di database";

/// Token pair issued at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthentication {
    pub access_token: String,
    pub refresh_token: String,
}

impl NewAuthentication {
    pub fn new(access_token: String, refresh_token: String) -> Result<Self, PayloadError> {
        ensure_present(
            PayloadEntity::NewAuthentication,
            &[&access_token, &refresh_token],
        )?;
        Ok(Self {
            access_token,
            refresh_token,
        })
    }
}

/// Validated `{ refreshToken }` payload used by refresh and logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenPayload {
    pub refresh_token: String,
}

impl RefreshTokenPayload {
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [refresh_token] = PayloadFields::new(payload)
            .require_strings(["refreshToken"])
            .map_err(|v| PayloadError::from_violation(PayloadEntity::RefreshToken, v))?;

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }
}

/// Repository trait for persisted refresh tokens.
///
/// Tokens are stored exactly as given.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> Result<(), AppError>;

    /// Fail with `InvalidToken` when the token is not stored.
    async fn verify_token_exists(&self, token: &str) -> Result<(), AppError>;

    async fn delete_token(&self, token: &str) -> Result<(), AppError>;
}
