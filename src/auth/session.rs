use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap, HeaderValue};
use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use serde::Serialize;
use tokio::sync::RwLock;

pub const SESSION_COOKIE: &str = "meditrust_sid";
pub const SESSION_TTL_HOURS: i64 = 24;

const TOKEN_LEN: usize = 48;

/// Identity snapshot held for the lifetime of a login.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
struct SessionEntry {
    user: SessionUser,
    expires_at: DateTime<Utc>,
}

/// Process-held token -> identity map. Sessions do not survive a restart.
///
/// Expiry is absolute: 24 hours from issuance, matching the cookie Max-Age.
/// Expired entries are dropped lazily on read and by the periodic sweep task
/// spawned in `main`.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn create(&self, user: SessionUser) -> String {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        let entry = SessionEntry {
            user,
            expires_at: Utc::now() + self.ttl,
        };
        self.inner.write().await.insert(token.clone(), entry);
        token
    }

    pub async fn get(&self, token: &str) -> Option<SessionUser> {
        {
            let sessions = self.inner.read().await;
            match sessions.get(token) {
                Some(entry) if entry.expires_at > Utc::now() => {
                    return Some(entry.user.clone());
                }
                Some(_) => {} // expired, fall through to remove
                None => return None,
            }
        }
        self.inner.write().await.remove(token);
        None
    }

    pub async fn destroy(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }

    pub async fn sweep(&self) {
        let now = Utc::now();
        self.inner.write().await.retain(|_, entry| entry.expires_at > now);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the session token from the request's Cookie header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
}

pub fn session_cookie(token: &str) -> HeaderValue {
    let value = format!(
        "{SESSION_COOKIE}={token}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
        SESSION_TTL_HOURS * 3600
    );
    HeaderValue::from_str(&value).expect("session cookie is ASCII")
}

pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("meditrust_sid=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_user() {
        let store = SessionStore::new();
        let token = store.create(user()).await;

        let resolved = store.get(&token).await.expect("session should resolve");
        assert_eq!(resolved.id, 1);
        assert_eq!(resolved.email, "asha@example.com");
    }

    #[tokio::test]
    async fn tokens_are_unique_per_login() {
        let store = SessionStore::new();
        let a = store.create(user()).await;
        let b = store.create(user()).await;
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn destroy_invalidates_the_token() {
        let store = SessionStore::new();
        let token = store.create(user()).await;

        assert!(store.destroy(&token).await);
        assert!(store.get(&token).await.is_none());
        // second destroy has nothing left to remove
        assert!(!store.destroy(&token).await);
    }

    #[tokio::test]
    async fn expired_sessions_are_dropped_on_read() {
        let store = SessionStore::with_ttl(Duration::seconds(-1));
        let token = store.create(user()).await;

        assert!(store.get(&token).await.is_none());
        // the read removed the entry rather than just hiding it
        assert!(!store.destroy(&token).await);
    }

    #[tokio::test]
    async fn sweep_drops_expired_entries() {
        let expired = SessionStore::with_ttl(Duration::seconds(-1));
        let token = expired.create(user()).await;
        expired.sweep().await;
        assert!(!expired.destroy(&token).await);

        let live = SessionStore::new();
        let token = live.create(user()).await;
        live.sweep().await;
        assert!(live.get(&token).await.is_some());
    }

    #[test]
    fn session_token_parses_the_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; meditrust_sid=abc123; lang=en"),
        );
        assert_eq!(session_token(&headers), Some("abc123"));
    }

    #[test]
    fn session_token_ignores_unrelated_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_token(&headers), None);

        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn login_cookie_is_http_only_and_bounded() {
        let value = session_cookie("tok");
        let value = value.to_str().unwrap();
        assert!(value.starts_with("meditrust_sid=tok;"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Max-Age=86400"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = clear_session_cookie();
        let value = value.to_str().unwrap();
        assert!(value.starts_with("meditrust_sid=;"));
        assert!(value.contains("Max-Age=0"));
    }
}
