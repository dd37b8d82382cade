//! Thread entity and repository trait.
//!
//! Maps to the `threads` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::ensure_present;
use crate::domain::errors::{PayloadEntity, PayloadError};
use crate::shared::error::AppError;
use crate::shared::validation::PayloadFields;

/// Message used when a thread lookup fails.
pub const THREAD_NOT_FOUND: &str = "thread tidak ditemukan";

/// Validated payload for creating a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    pub fn new(owner: &str, payload: &Value) -> Result<Self, PayloadError> {
        let [title, body] = PayloadFields::new(payload)
            .require_strings(["title", "body"])
            .map_err(|v| PayloadError::from_violation(PayloadEntity::NewThread, v))?;

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
            owner: owner.to_string(),
        })
    }

    pub fn into_thread(self, id: String, date: DateTime<Utc>) -> Thread {
        Thread {
            id,
            title: self.title,
            body: self.body,
            owner: self.owner,
            date,
        }
    }
}

/// A thread row.
///
/// Maps to the `threads` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - title: TEXT NOT NULL
/// - body: TEXT NOT NULL
/// - date: TIMESTAMPTZ NOT NULL
/// - owner: VARCHAR(50) NOT NULL REFERENCES users(id) ON DELETE CASCADE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub date: DateTime<Utc>,
}

/// Projection returned after a thread is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(id: String, title: String, owner: String) -> Result<Self, PayloadError> {
        ensure_present(PayloadEntity::AddedThread, &[&id, &title, &owner])?;
        Ok(Self { id, title, owner })
    }
}

/// Thread as shown on the detail page, with the owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl GetThread {
    pub fn new(
        id: String,
        title: String,
        body: String,
        date: DateTime<Utc>,
        username: String,
    ) -> Result<Self, PayloadError> {
        ensure_present(PayloadEntity::GetThread, &[&id, &title, &body, &username])?;
        Ok(Self {
            id,
            title,
            body,
            date,
            username,
        })
    }
}

/// Repository trait for Thread data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Insert a thread and return its projection.
    async fn add_thread(&self, thread: &Thread) -> Result<AddedThread, AppError>;

    /// Fail with `NotFound` when no thread has this id.
    async fn verify_thread_exists(&self, thread_id: &str) -> Result<(), AppError>;

    /// Load a thread joined with its owner's username.
    async fn find_thread_by_id(&self, thread_id: &str) -> Result<GetThread, AppError>;
}
