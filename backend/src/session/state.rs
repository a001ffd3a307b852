//! Holds the live sessions of the application.
//!
//! The map from token to user id is the single source of truth: dropping
//! an entry invalidates the token immediately. Sessions live in process
//! memory only and do not survive a restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe, shareable container for all live sessions.
///
/// Created once in `main.rs` and injected into handlers as `web::Data`.
/// Reads (every authenticated request) far outnumber writes (login and
/// logout), hence the `RwLock`.
#[derive(Clone)]
pub struct SessionsState {
    sessions: Arc<RwLock<HashMap<String, i64>>>,
}

impl SessionsState {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Open a session for `user_id` and return the fresh token.
    pub async fn open(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(token.clone(), user_id);
        token
    }

    /// Look up the user id bound to `token`.
    pub async fn resolve(&self, token: &str) -> Option<i64> {
        self.sessions.read().await.get(token).copied()
    }

    /// Revoke `token`. Unknown tokens are ignored, which keeps logout
    /// idempotent.
    pub async fn close(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn open_resolve_close() {
        let sessions = SessionsState::new();
        let token = sessions.open(7).await;
        assert_eq!(sessions.resolve(&token).await, Some(7));

        sessions.close(&token).await;
        assert_eq!(sessions.resolve(&token).await, None);

        // A second close must stay silent.
        sessions.close(&token).await;
    }

    #[actix_web::test]
    async fn tokens_are_distinct_per_session() {
        let sessions = SessionsState::new();
        let a = sessions.open(1).await;
        let b = sessions.open(2).await;
        assert_ne!(a, b);
        assert_eq!(sessions.resolve(&a).await, Some(1));
        assert_eq!(sessions.resolve(&b).await, Some(2));
    }
}
