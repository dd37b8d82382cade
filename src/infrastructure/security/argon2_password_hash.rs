//! Argon2id password hashing.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as ParsedHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use crate::application::security::PasswordHash;
use crate::shared::error::AppError;

pub const WRONG_CREDENTIALS: &str = "kredensial yang Anda masukkan salah";

/// Argon2id hasher with a random salt per password.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHash;

impl Argon2PasswordHash {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHash for Argon2PasswordHash {
    /// Hash a password using Argon2id
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against its hash
    fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError> {
        let parsed_hash = ParsedHash::new(hashed)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized(WRONG_CREDENTIALS.to_string()))
    }
}
