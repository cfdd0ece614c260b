// src/state.rs
use sqlx::PgPool;

use crate::auth::session::SessionStore;
use crate::services::prediction::PredictionClient;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub sessions: SessionStore,
    pub predictions: PredictionClient,
}

impl AppState {
    pub fn new(db_pool: PgPool, sessions: SessionStore, predictions: PredictionClient) -> Self {
        Self {
            db_pool,
            sessions,
            predictions,
        }
    }
}
