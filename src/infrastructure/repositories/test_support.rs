//! Fixtures for the PostgreSQL repository tests.
//!
//! Tests connect through `DATABASE_URL` and skip when it is unset or the
//! server is unreachable. Every fixture row gets a fresh id so tests can
//! share one database.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::infrastructure::database;

pub async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&url)
        .await
        .ok()?;

    database::run_migrations(&pool)
        .await
        .expect("migrations apply");
    Some(pool)
}

pub fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Insert a user and return `(id, username)`.
pub async fn insert_user(pool: &PgPool) -> (String, String) {
    let id = unique_id("user");
    let username = unique_id("u");

    sqlx::query("INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4)")
        .bind(&id)
        .bind(&username)
        .bind("secret")
        .bind("Dicoding Indonesia")
        .execute(pool)
        .await
        .expect("insert user");

    (id, username)
}

pub async fn insert_thread(pool: &PgPool, owner: &str) -> String {
    let id = unique_id("thread");

    sqlx::query("INSERT INTO threads (id, title, body, date, owner) VALUES ($1, $2, $3, $4, $5)")
        .bind(&id)
        .bind("sebuah thread")
        .bind("sebuah body thread")
        .bind(Utc::now())
        .bind(owner)
        .execute(pool)
        .await
        .expect("insert thread");

    id
}

pub async fn insert_comment(
    pool: &PgPool,
    thread_id: &str,
    owner: &str,
    date: DateTime<Utc>,
) -> String {
    let id = unique_id("comment");

    sqlx::query(
        "INSERT INTO comments (id, thread_id, content, date, owner, is_deleted) \
         VALUES ($1, $2, $3, $4, $5, FALSE)",
    )
    .bind(&id)
    .bind(thread_id)
    .bind("sebuah comment")
    .bind(date)
    .bind(owner)
    .execute(pool)
    .await
    .expect("insert comment");

    id
}

pub async fn insert_reply(
    pool: &PgPool,
    comment_id: &str,
    owner: &str,
    date: DateTime<Utc>,
) -> String {
    let id = unique_id("reply");

    sqlx::query(
        "INSERT INTO replies (id, comment_id, content, date, owner, is_deleted) \
         VALUES ($1, $2, $3, $4, $5, FALSE)",
    )
    .bind(&id)
    .bind(comment_id)
    .bind("sebuah balasan")
    .bind(date)
    .bind(owner)
    .execute(pool)
    .await
    .expect("insert reply");

    id
}
