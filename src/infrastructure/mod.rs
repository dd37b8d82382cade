//! Infrastructure Layer
//!
//! Contains implementations for external concerns including:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations
//! - Password hashing and JWT signing
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
pub mod security;
