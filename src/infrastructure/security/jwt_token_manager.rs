//! JWT token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::security::{AuthenticationTokenManager, TokenPayload};
use crate::config::JwtSettings;
use crate::shared::error::AppError;

pub const MISSING_AUTHENTICATION: &str = "Missing authentication";

pub const INVALID_REFRESH_TOKEN: &str = "refresh token tidak valid";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub id: String,
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Unique per token, so two tokens issued in the same second differ
    pub jti: String,
}

/// One signing key pair plus its token lifetime.
#[derive(Clone)]
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SigningKeys {
    fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

/// HS256 token manager with separate access and refresh keys.
#[derive(Clone)]
pub struct JwtTokenManager {
    access: SigningKeys,
    refresh: SigningKeys,
}

impl std::fmt::Debug for JwtTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenManager").finish_non_exhaustive()
    }
}

impl JwtTokenManager {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            access: SigningKeys::new(
                &settings.access_token_key,
                Duration::seconds(settings.access_token_age_secs),
            ),
            refresh: SigningKeys::new(
                &settings.refresh_token_key,
                Duration::days(settings.refresh_token_age_days),
            ),
        }
    }

    fn sign(keys: &SigningKeys, payload: &TokenPayload) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            exp: (now + keys.ttl).timestamp(),
            iat: now.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    fn verify(keys: &SigningKeys, token: &str) -> Result<TokenPayload, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<TokenClaims>(token, &keys.decoding, &validation)?;

        Ok(TokenPayload {
            id: data.claims.id,
            username: data.claims.username,
        })
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        Self::sign(&self.access, payload)
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        Self::sign(&self.refresh, payload)
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        Self::verify(&self.access, token).map_err(|e| {
            tracing::debug!("Access token rejected: {}", e);
            AppError::Unauthorized(MISSING_AUTHENTICATION.to_string())
        })
    }

    fn verify_refresh_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        Self::verify(&self.refresh, token).map_err(|e| {
            tracing::debug!("Refresh token rejected: {}", e);
            AppError::InvalidToken(INVALID_REFRESH_TOKEN.to_string())
        })
    }
}
