use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::router::AppState;

/// In-memory store of admin session tokens. Tokens are opaque v4 uuids
/// handed out on login and checked on every admin request; they expire
/// after the configured TTL and disappear on restart, which forces a
/// fresh login — acceptable for a single-admin site.
pub struct SessionStore {
    sessions: DashMap<Uuid, Instant>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        SessionStore {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Issues a fresh session token. Expired entries are swept here rather
    /// than on a timer; the map only ever holds a handful of tokens.
    pub fn issue(&self) -> Uuid {
        self.sessions
            .retain(|_, issued_at| issued_at.elapsed() < self.ttl);
        let token = Uuid::new_v4();
        self.sessions.insert(token, Instant::now());
        token
    }

    pub fn validate(&self, token: Uuid) -> bool {
        // The read guard must be dropped before remove() touches the shard.
        let expired = match self.sessions.get(&token) {
            Some(issued_at) => issued_at.elapsed() >= self.ttl,
            None => return false,
        };
        if expired {
            self.sessions.remove(&token);
            return false;
        }
        true
    }

    /// Removes the token. Returns whether it was present.
    pub fn revoke(&self, token: Uuid) -> bool {
        self.sessions.remove(&token).is_some()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Pulls the uuid out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&axum::http::HeaderValue>) -> Option<Uuid> {
    let value = header?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// Middleware guarding the `/api/admin` routes (everything except login).
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers().get(AUTHORIZATION));
    match token {
        Some(token) if state.sessions.validate(token) => Ok(next.run(request).await),
        _ => {
            debug!("Rejecting admin request without a valid session token");
            Err(ApiError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn issued_tokens_validate_until_revoked() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.issue();
        assert!(store.validate(token));
        assert!(store.revoke(token));
        assert!(!store.validate(token));
        assert!(!store.revoke(token));
    }

    #[test]
    fn unknown_tokens_do_not_validate() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(!store.validate(Uuid::new_v4()));
    }

    #[test]
    fn tokens_expire_after_the_ttl() {
        let store = SessionStore::new(Duration::from_millis(10));
        let token = store.issue();
        std::thread::sleep(Duration::from_millis(25));
        assert!(!store.validate(token));
    }

    #[test]
    fn issue_sweeps_expired_entries() {
        let store = SessionStore::new(Duration::from_millis(10));
        let stale = store.issue();
        std::thread::sleep(Duration::from_millis(25));
        let fresh = store.issue();
        assert!(store.validate(fresh));
        assert!(!store.validate(stale));
    }

    #[test]
    fn bearer_token_parses_well_formed_headers() {
        let token = Uuid::new_v4();
        let value = HeaderValue::from_str(&format!("Bearer {}", token)).unwrap();
        assert_eq!(bearer_token(Some(&value)), Some(token));
    }

    #[test]
    fn bearer_token_rejects_malformed_headers() {
        assert_eq!(bearer_token(None), None);
        let no_scheme = HeaderValue::from_static("abc123");
        assert_eq!(bearer_token(Some(&no_scheme)), None);
        let not_a_uuid = HeaderValue::from_static("Bearer not-a-uuid");
        assert_eq!(bearer_token(Some(&not_a_uuid)), None);
    }
}
