//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally belong to
//! a single entity.
//!
//! ## Services
//!
//! - **ThreadDetailAssembler**: merges a thread with its comments, replies and
//!   like counts, masking soft-deleted content

mod thread_detail;

pub use thread_detail::*;
