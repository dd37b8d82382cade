//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - User accounts
//! - **PgAuthenticationRepository** - Persisted refresh token digests
//! - **PgThreadRepository** - Threads joined with their owner
//! - **PgCommentRepository** - Comments with soft delete
//! - **PgReplyRepository** - Replies with soft delete
//! - **PgLikeRepository** - Comment likes and per-comment counts
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgThreadRepository, PgCommentRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let thread_repo = PgThreadRepository::new(pool.clone());
//!     let comment_repo = PgCommentRepository::new(pool.clone());
//! }
//! ```

pub mod authentication_repository;
pub mod comment_repository;
pub mod like_repository;
pub mod reply_repository;
pub mod thread_repository;
pub mod user_repository;

#[cfg(test)]
pub(crate) mod test_support;

pub use authentication_repository::PgAuthenticationRepository;
pub use comment_repository::PgCommentRepository;
pub use like_repository::PgLikeRepository;
pub use reply_repository::PgReplyRepository;
pub use thread_repository::PgThreadRepository;
pub use user_repository::PgUserRepository;
