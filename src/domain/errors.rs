//! Domain validation errors.
//!
//! Entity constructors fail with [`PayloadError`], which records which entity
//! rejected its input and why. Errors raised while validating client input are
//! rendered as 400 responses with a localized message; errors raised while
//! building read models from storage indicate a server fault.

use crate::shared::error::AppError;
use crate::shared::validation::FieldViolation;

/// Entities that validate their input on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEntity {
    RegisterUser,
    UserLogin,
    RefreshToken,
    NewThread,
    NewComment,
    NewReply,
    GetThread,
    GetComment,
    GetReply,
    AddedUser,
    AddedThread,
    AddedComment,
    AddedReply,
    NewAuthentication,
}

impl PayloadEntity {
    /// Whether the entity is built from client-supplied input.
    pub fn is_client_input(&self) -> bool {
        matches!(
            self,
            Self::RegisterUser
                | Self::UserLogin
                | Self::RefreshToken
                | Self::NewThread
                | Self::NewComment
                | Self::NewReply
        )
    }

    fn missing_property_message(&self) -> &'static str {
        match self {
            Self::RegisterUser => {
                "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
            }
            Self::UserLogin => "harus mengirimkan username dan password",
            Self::RefreshToken => "harus mengirimkan token refresh",
            Self::NewThread => {
                "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
            }
            Self::NewComment => {
                "tidak dapat membuat komentar baru karena properti yang dibutuhkan tidak ada"
            }
            Self::NewReply => {
                "tidak dapat membuat balasan baru karena properti yang dibutuhkan tidak ada"
            }
            _ => "entity is missing a required property",
        }
    }

    fn wrong_type_message(&self) -> &'static str {
        match self {
            Self::RegisterUser => "tidak dapat membuat user baru karena tipe data tidak sesuai",
            Self::UserLogin => "username dan password harus string",
            Self::RefreshToken => "refresh token harus string",
            Self::NewThread => "tidak dapat membuat thread baru karena tipe data tidak sesuai",
            Self::NewComment => "tidak dapat membuat komentar baru karena tipe data tidak sesuai",
            Self::NewReply => "tidak dapat membuat balasan baru karena tipe data tidak sesuai",
            _ => "entity property has an unexpected type",
        }
    }
}

/// Reason an entity refused to be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("{}", .0.missing_property_message())]
    MissingProperty(PayloadEntity),

    #[error("{}", .0.wrong_type_message())]
    WrongType(PayloadEntity),

    /// A field-level rule (length, character set) was broken.
    #[error("{1}")]
    Rule(PayloadEntity, String),
}

impl PayloadError {
    pub fn from_violation(entity: PayloadEntity, violation: FieldViolation) -> Self {
        match violation {
            FieldViolation::MissingProperty => Self::MissingProperty(entity),
            FieldViolation::WrongType => Self::WrongType(entity),
        }
    }

    pub fn entity(&self) -> PayloadEntity {
        match self {
            Self::MissingProperty(entity) | Self::WrongType(entity) | Self::Rule(entity, _) => {
                *entity
            }
        }
    }
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        if err.entity().is_client_input() {
            AppError::InvalidPayload(err.to_string())
        } else {
            AppError::Internal(format!("{:?}: {}", err.entity(), err))
        }
    }
}
