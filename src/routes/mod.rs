pub mod cart;
pub mod medicines;
pub mod predictions;
pub mod users;

use axum::Router;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(medicines::routes())
        .merge(cart::routes(state))
        .merge(predictions::routes())
}
