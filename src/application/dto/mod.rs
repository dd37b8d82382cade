//! Data Transfer Objects
//!
//! DTOs for API response serialization. Request bodies are read as raw JSON
//! and validated by the domain entities.

pub mod response;

pub use response::*;
