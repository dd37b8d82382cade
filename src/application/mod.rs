//! Application Layer
//!
//! Contains use-case services, the security collaborator traits they depend
//! on, and the response DTOs. This layer orchestrates the flow of data between
//! the presentation and domain layers.

pub mod dto;
pub mod security;
pub mod services;
