//! HTTP routes

pub mod cart;
pub mod health;

use crate::state::ServerState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Carts are small; anything larger is rejected before parsing
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new().merge(cart::router()).merge(health::router())
}

/// Build the application with middleware and state
pub fn build_app(state: ServerState, request_timeout: Duration) -> Router {
    build_router()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
