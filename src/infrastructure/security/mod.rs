//! Security Implementations
//!
//! Concrete password hashing and token signing behind the application's
//! security traits.

mod argon2_password_hash;
mod jwt_token_manager;

pub use argon2_password_hash::Argon2PasswordHash;
pub use jwt_token_manager::{
    JwtTokenManager, TokenClaims, INVALID_REFRESH_TOKEN, MISSING_AUTHENTICATION,
};
