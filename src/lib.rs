//! # Forum API Library
//!
//! This crate provides a discussion forum backend with:
//! - RESTful HTTP API endpoints
//! - JWT access/refresh token authentication
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, validation rules, repository traits and the
//!   thread detail assembler
//! - **Application Layer**: Use case services, security traits and DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories, argon2/JWT, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_api/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, errors and services
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, security and metrics implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation, ids)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
