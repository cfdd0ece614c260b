use axum::{routing::{get, post}, Router};
use crate::handlers::user::{auth_status, login, logout, signup};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/auth-status", get(auth_status))
}
