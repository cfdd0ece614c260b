use axum::{routing::post, Router};
use crate::handlers::prediction::{predict_demand, verify_license};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/verify-license", post(verify_license))
        .route("/api/predict-demand", post(predict_demand))
}
