//! Cart API
//!
//! | Path | Method | Body / Response |
//! |------|--------|-----------------|
//! | /api/cart/{userId} | GET | `{ success, data: CartItem[] }` |
//! | /api/cart/{userId} | POST | `{ cart: CartItem[] }` → `{ success }` |

mod handler;

use crate::state::ServerState;
use axum::{Router, routing::get};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/cart/{user_id}", get(handler::get_cart).post(handler::save_cart))
}
