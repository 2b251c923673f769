//! Health check
//!
//! ```json
//! { "status": "ok", "carts": 3 }
//! ```

use crate::state::ServerState;
use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    /// Number of stored carts
    carts: usize,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        carts: state.cart_count(),
    })
}
