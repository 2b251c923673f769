//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::state::ServerState;
use shared::validation::validate_user_id;
use shared::{ApiResponse, AppError, AppResult, CartItem, CartPayload};

/// GET /api/cart/{user_id} - stored cart, empty when unknown
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<CartItem>>>> {
    validate_user_id(&user_id)?;
    let items = state.cart(&user_id);
    tracing::debug!(user_id = %user_id, items = items.len(), "Cart fetched");
    Ok(Json(ApiResponse::success(items)))
}

/// POST /api/cart/{user_id} - replace the stored cart
pub async fn save_cart(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    payload: Result<Json<CartPayload>, JsonRejection>,
) -> AppResult<Json<ApiResponse<()>>> {
    validate_user_id(&user_id)?;
    let Json(payload) = payload.map_err(|e| AppError::invalid_request(e.body_text()))?;

    tracing::debug!(user_id = %user_id, items = payload.cart.len(), "Cart saved");
    state.save_cart(user_id, payload.cart);
    Ok(Json(ApiResponse::ok()))
}
