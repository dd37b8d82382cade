//! HTTP API
//!
//! Route table, request handlers and extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
