//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Registration, authentication and thread reads
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::register_user))
        .route(
            "/authentications",
            post(handlers::authentications::login)
                .put(handlers::authentications::refresh_access_token)
                .delete(handlers::authentications::logout),
        )
        .route(
            "/threads/{thread_id}",
            get(handlers::threads::get_thread_detail),
        )
}

/// Routes that require a bearer access token
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/threads", post(handlers::threads::add_thread))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::comments::add_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::comments::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(handlers::likes::toggle_comment_like),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::replies::add_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::replies::delete_reply),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
