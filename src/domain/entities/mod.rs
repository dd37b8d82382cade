//! # Domain Entities
//!
//! Core domain entities representing the main business objects of the forum.
//!
//! ## Core Entities
//!
//! - **User**: account with a hashed password
//! - **Thread**: top-level discussion post
//! - **Comment**: first-level response to a thread, soft-deletable
//! - **Reply**: response to a comment, soft-deletable
//! - **Like**: a user's like on a comment
//! - **Authentication**: persisted refresh token
//!
//! Input entities (`NewThread`, `RegisterUser`, ...) are built by validating
//! constructors. Read models (`GetThread`, `GetComment`, ...) are built from
//! repository rows and refuse empty fields.
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod authentication;
mod comment;
mod like;
mod reply;
mod thread;
mod user;

use crate::domain::errors::{PayloadEntity, PayloadError};

pub use authentication::{
    AuthenticationRepository, NewAuthentication, RefreshTokenPayload, REFRESH_TOKEN_NOT_FOUND,
};
pub use comment::{
    AddedComment, Comment, CommentRepository, GetComment, NewComment, ThreadComment,
    COMMENT_ACCESS_DENIED, COMMENT_NOT_FOUND, DELETED_COMMENT_CONTENT,
};
pub use like::{Like, LikeCount, LikeRepository};
pub use reply::{
    AddedReply, CommentReply, GetReply, NewReply, Reply, ReplyRepository, DELETED_REPLY_CONTENT,
    REPLY_ACCESS_DENIED, REPLY_NOT_FOUND,
};
pub use thread::{AddedThread, GetThread, NewThread, Thread, ThreadRepository, THREAD_NOT_FOUND};
pub use user::{AddedUser, RegisterUser, User, UserLogin, UserRepository, USERNAME_TAKEN};

#[cfg(test)]
pub use authentication::MockAuthenticationRepository;
#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use like::MockLikeRepository;
#[cfg(test)]
pub use reply::MockReplyRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;
#[cfg(test)]
pub use user::MockUserRepository;

/// Fail with `MissingProperty` when any field is empty.
fn ensure_present(entity: PayloadEntity, fields: &[&str]) -> Result<(), PayloadError> {
    if fields.iter().any(|field| field.is_empty()) {
        return Err(PayloadError::MissingProperty(entity));
    }
    Ok(())
}
