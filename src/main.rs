// src/main.rs
mod auth;
mod database;
mod dtos;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use axum::{routing::get, Router};
use http::{header, HeaderValue, Method};
use tracing_subscriber::fmt::init as tracing_init;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use dotenvy::dotenv;
use std::net::{SocketAddr, IpAddr};

use auth::session::SessionStore;
use services::prediction::PredictionClient;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Create database pool
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");
    let db_pool = database::create_pool(&database_url).await
        .expect("Failed to create database pool");

    // Session store with a periodic sweep for expired tokens
    let sessions = SessionStore::new();
    tokio::spawn({
        let sessions = sessions.clone();
        async move {
            let mut tick = tokio::time::interval(std::time::Duration::from_secs(600));
            loop {
                tick.tick().await;
                sessions.sweep().await;
            }
        }
    });

    // Create application state
    let app_state = state::AppState::new(db_pool, sessions, PredictionClient::from_env());

    // The session cookie has to cross from the frontend origin
    let frontend_origin = std::env::var("FRONTEND_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3001".to_string());
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin.parse::<HeaderValue>().expect("Invalid FRONTEND_ORIGIN"))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = routes::create_router(app_state.clone())
        .route("/", get(|| async { "MediTrust API" }))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(app_state);

    // Start server with HOST/PORT env and graceful port selection
    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let base_port = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()).unwrap_or(3000);

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

async fn health_check() -> &'static str {
    "OK"
}
