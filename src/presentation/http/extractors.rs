//! Custom Extractors
//!
//! Axum extractors for authentication and request parsing.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;

use crate::infrastructure::security::MISSING_AUTHENTICATION;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;

/// Raw JSON request body.
///
/// A missing or malformed body becomes `Value::Null`, so the domain entity
/// reports it as a missing property instead of axum rejecting the request
/// with its own plain-text error.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Unreadable JSON body: {}", rejection);
                Ok(Self(Value::Null))
            }
        }
    }
}

/// The user attached by `auth_middleware`.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized(MISSING_AUTHENTICATION.into()))
    }
}
