use axum::{middleware, routing::{delete, post}, Router};
use crate::handlers::cart::{add_to_cart, get_cart, remove_cart_item, update_cart_item};
use crate::middleware::auth::require_session;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/cart", post(add_to_cart).get(get_cart))
        .route("/api/cart/update", post(update_cart_item))
        .route("/api/cart/remove/{product_id}", delete(remove_cart_item))
        .layer(middleware::from_fn_with_state(state, require_session))
}
