//! Application Services
//!
//! Use cases that coordinate repositories and domain rules.
//!
//! ## Available Services
//!
//! - **AuthService**: Login, access token renewal, logout
//! - **UserService**: Registration
//! - **ThreadService**: Thread creation and thread detail
//! - **CommentService**: Comment creation and soft delete
//! - **ReplyService**: Reply creation and soft delete
//! - **LikeService**: Like toggle on comments

pub mod auth_service;
pub mod comment_service;
pub mod like_service;
pub mod reply_service;
pub mod thread_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use comment_service::{CommentService, CommentServiceImpl};
pub use like_service::{LikeService, LikeServiceImpl};
pub use reply_service::{ReplyService, ReplyServiceImpl};
pub use thread_service::{ThreadService, ThreadServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
