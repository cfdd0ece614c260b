use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::auth::session::session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the session cookie against the session store and attaches the
/// authenticated user to the request. Handlers behind this layer never see a
/// request without a valid session.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = match session_token(req.headers()) {
        Some(t) => t.to_owned(),
        None => return AppError::Unauthorized.into_response(),
    };

    let user = match state.sessions.get(&token).await {
        Some(u) => u,
        None => return AppError::Unauthorized.into_response(),
    };

    req.extensions_mut().insert(user);
    next.run(req).await
}
