use axum::{routing::get, Router};
use crate::handlers::medicine::get_medicines;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/products", get(get_medicines))
}
