//! # Domain Layer
//!
//! The domain layer contains the core business rules of the forum.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, Thread, Comment, Reply, Like)
//! - **errors**: Validation errors raised by entity constructors
//! - **services**: Domain services for logic spanning several entities
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Entities are built by validating constructors
//! - Repository traits define data access contracts

pub mod entities;
pub mod errors;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use errors::{PayloadEntity, PayloadError};
