// src/handlers/cart.rs
//
// Thin adapters over services::cart. The session middleware has already
// resolved the user; bodies are validated here before the service runs.
use axum::extract::{Extension, Path, State};
use axum::Json;

use crate::auth::session::SessionUser;
use crate::dtos::cart::{AddToCartRequest, CartItemResponse, UpdateCartRequest};
use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::services::cart;
use crate::state::AppState;

// POST /api/cart - Add with merge semantics
pub async fn add_to_cart(
    State(AppState { db_pool, .. }): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Json(payload): Json<AddToCartRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if payload.product_id <= 0 {
        return Err(AppError::validation("Valid product ID required"));
    }
    if payload.quantity <= 0 {
        return Err(AppError::validation("Quantity must be greater than 0"));
    }

    let new_quantity =
        cart::add_item(&db_pool, user.id, payload.product_id, payload.quantity).await?;

    // An existing row holds at least 1, so a merged result always exceeds
    // the delta that was just sent.
    let message = if new_quantity == payload.quantity {
        "Item added to cart"
    } else {
        "Cart updated with new quantity"
    };

    Ok(Json(MessageResponse { message }))
}

// GET /api/cart - List the user's entries joined with the catalog
pub async fn get_cart(
    State(AppState { db_pool, .. }): State<AppState>,
    Extension(user): Extension<SessionUser>,
) -> Result<Json<Vec<CartItemResponse>>, AppError> {
    let items = cart::list_items(&db_pool, user.id).await?;
    Ok(Json(items.into_iter().map(CartItemResponse::from).collect()))
}

// POST /api/cart/update - Absolute set, never merges
pub async fn update_cart_item(
    State(AppState { db_pool, .. }): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Json(payload): Json<UpdateCartRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if payload.product_id <= 0 {
        return Err(AppError::validation("Valid product ID required"));
    }
    if payload.quantity <= 0 {
        return Err(AppError::validation("Quantity must be greater than 0"));
    }

    cart::update_quantity(&db_pool, user.id, payload.product_id, payload.quantity).await?;

    Ok(Json(MessageResponse {
        message: "Cart item updated successfully",
    }))
}

// DELETE /api/cart/remove/{product_id}
pub async fn remove_cart_item(
    Path(product_id): Path<i64>,
    State(AppState { db_pool, .. }): State<AppState>,
    Extension(user): Extension<SessionUser>,
) -> Result<Json<MessageResponse>, AppError> {
    cart::remove_item(&db_pool, user.id, product_id).await?;

    Ok(Json(MessageResponse {
        message: "Item removed from cart",
    }))
}
