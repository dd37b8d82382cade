//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod authentications;
pub mod comments;
pub mod health;
pub mod likes;
pub mod replies;
pub mod threads;
pub mod users;
