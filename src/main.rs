//! # Forum API
//!
//! Discussion forum backend: users, authentication, threads, comments,
//! replies and likes over a JSON HTTP API.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use forum_api::config::Settings;
use forum_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    forum_api::telemetry::init_tracing();

    info!("Starting Forum API...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
