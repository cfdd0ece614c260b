use bcrypt::{hash, verify, DEFAULT_COST};
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::session::{clear_session_cookie, session_cookie, session_token, SessionUser};
use crate::dtos::user::{AuthStatusResponse, LoginRequest, LoginResponse, SignupRequest};
use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub async fn signup(
    State(AppState { db_pool, .. }): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    // Basic validation
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Name required"));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError::validation("Email required"));
    }
    if payload.password.len() < 6 {
        return Err(AppError::validation(
            "Password must be at least 6 characters",
        ));
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    sqlx::query("INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)")
        .bind(payload.name.trim())
        .bind(payload.email.trim())
        .bind(password_hash)
        .execute(&db_pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.code().as_deref() == Some("23505") {
                    return AppError::conflict("Email already registered");
                }
            }
            AppError::db(e)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Signup successful",
        }),
    ))
}

pub async fn login(
    State(AppState {
        db_pool, sessions, ..
    }): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::validation("Email required"));
    }
    if payload.password.is_empty() {
        return Err(AppError::validation("Password required"));
    }

    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(payload.email.trim())
    .fetch_optional(&db_pool)
    .await?
    .ok_or_else(|| AppError::validation("Invalid credentials"))?;

    let ok = verify(&payload.password, &user.password_hash)
        .map_err(|e| AppError::internal(format!("Password verify error: {e}")))?;

    if !ok {
        return Err(AppError::validation("Invalid credentials"));
    }

    let session_user = SessionUser {
        id: user.id,
        name: user.name,
        email: user.email,
    };
    let token = sessions.create(session_user.clone()).await;

    let mut response = Json(LoginResponse {
        message: "Login successful",
        user: session_user,
    })
    .into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, session_cookie(&token));

    Ok(response)
}

// Logout destroys whatever session the cookie names; a stale or missing
// cookie still gets a 200 and a cleared cookie.
pub async fn logout(
    State(AppState { sessions, .. }): State<AppState>,
    headers: HeaderMap,
) -> Response {
    if let Some(token) = session_token(&headers) {
        sessions.destroy(token).await;
    }

    let mut response = Json(MessageResponse {
        message: "Logged out successfully",
    })
    .into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, clear_session_cookie());

    response
}

pub async fn auth_status(
    State(AppState { sessions, .. }): State<AppState>,
    headers: HeaderMap,
) -> Json<AuthStatusResponse> {
    let user = match session_token(&headers) {
        Some(token) => sessions.get(token).await,
        None => None,
    };

    Json(AuthStatusResponse {
        logged_in: user.is_some(),
        user,
    })
}
