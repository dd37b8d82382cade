//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{middleware, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    AuthService, AuthServiceImpl, CommentService, CommentServiceImpl, LikeService,
    LikeServiceImpl, ReplyService, ReplyServiceImpl, ThreadService, ThreadServiceImpl,
    UserService, UserServiceImpl,
};
use crate::config::{CorsSettings, Settings};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgAuthenticationRepository, PgCommentRepository, PgLikeRepository, PgReplyRepository,
    PgThreadRepository, PgUserRepository,
};
use crate::infrastructure::security::{Argon2PasswordHash, JwtTokenManager};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging, track_metrics};
use crate::shared::id_generator::IdGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub user_service: Arc<dyn UserService>,
    pub auth_service: Arc<dyn AuthService>,
    pub thread_service: Arc<dyn ThreadService>,
    pub comment_service: Arc<dyn CommentService>,
    pub reply_service: Arc<dyn ReplyService>,
    pub like_service: Arc<dyn LikeService>,
}

impl AppState {
    /// Wire the PostgreSQL repositories and security collaborators into
    /// every service.
    pub fn from_pool(db: PgPool, settings: &Settings) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(db.clone()));
        let auth_repo = Arc::new(PgAuthenticationRepository::new(db.clone()));
        let thread_repo = Arc::new(PgThreadRepository::new(db.clone()));
        let comment_repo = Arc::new(PgCommentRepository::new(db.clone()));
        let reply_repo = Arc::new(PgReplyRepository::new(db.clone()));
        let like_repo = Arc::new(PgLikeRepository::new(db.clone()));

        let password_hash = Arc::new(Argon2PasswordHash::new());
        let token_manager = Arc::new(JwtTokenManager::new(&settings.jwt));
        let id_generator = Arc::new(IdGenerator::new());

        Self {
            user_service: Arc::new(UserServiceImpl::new(
                user_repo.clone(),
                password_hash.clone(),
                id_generator.clone(),
            )),
            auth_service: Arc::new(AuthServiceImpl::new(
                user_repo,
                auth_repo,
                password_hash,
                token_manager,
            )),
            thread_service: Arc::new(ThreadServiceImpl::new(
                thread_repo.clone(),
                comment_repo.clone(),
                reply_repo.clone(),
                like_repo.clone(),
                id_generator.clone(),
            )),
            comment_service: Arc::new(CommentServiceImpl::new(
                thread_repo.clone(),
                comment_repo.clone(),
                id_generator.clone(),
            )),
            reply_service: Arc::new(ReplyServiceImpl::new(
                thread_repo.clone(),
                comment_repo.clone(),
                reply_repo,
                id_generator.clone(),
            )),
            like_service: Arc::new(LikeServiceImpl::new(
                thread_repo,
                comment_repo,
                like_repo,
                id_generator,
            )),
            db,
        }
    }
}

/// Build the router with every middleware layer applied.
pub fn build_router(state: AppState, cors_settings: &CorsSettings) -> Router {
    routes::create_router(state)
        .layer(middleware::from_fn(track_metrics))
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(cors_settings))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let state = AppState::from_pool(db, &settings);
        let router = build_router(state, &settings.cors);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
