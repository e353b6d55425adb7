use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::context::SessionContext;
use crate::client::BackendError;
use crate::metrics::set_active_sessions;

/// Sessions are keyed by a digest so raw tokens never sit in memory as keys.
pub fn session_key(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Arc<SessionContext>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, token: &str) -> Option<Arc<SessionContext>> {
        self.sessions.read().await.get(&session_key(token)).cloned()
    }

    pub async fn get_or_create(&self, token: &str) -> Arc<SessionContext> {
        let key = session_key(token);
        if let Some(session) = self.sessions.read().await.get(&key) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(key)
            .or_insert_with(|| Arc::new(SessionContext::new()))
            .clone();
        set_active_sessions(sessions.len());
        session
    }

    /// Removes the session and clears it, so loads still holding the context
    /// cannot publish into it. Returns false for an unknown token.
    pub async fn end(&self, token: &str) -> bool {
        let removed = {
            let mut sessions = self.sessions.write().await;
            let removed = sessions.remove(&session_key(token));
            set_active_sessions(sessions.len());
            removed
        };
        match removed {
            Some(session) => {
                session.clear().await;
                true
            }
            None => false,
        }
    }

    /// Ends the session when the backend turned its token away. Other
    /// failures leave it in place so a retry can reuse it.
    pub async fn end_if_rejected(&self, token: &str, error: &BackendError) -> bool {
        error.is_unauthorized() && self.end(token).await
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_session_key_is_hex_digest() {
        let key = session_key("secret-token");
        assert_eq!(key.len(), 64);
        assert!(!key.contains("secret"));
        assert_eq!(key, session_key("secret-token"));
        assert_ne!(key, session_key("other-token"));
    }

    #[tokio::test]
    async fn test_get_or_create_reuses_session() {
        let store = SessionStore::new();
        let first = store.get_or_create("token-a").await;
        let second = store.get_or_create("token-a").await;
        let other = store.get_or_create("token-b").await;

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_end_removes_and_invalidates() {
        let store = SessionStore::new();
        let session = store.get_or_create("token-a").await;
        let generation = session.generation();

        assert!(store.end("token-a").await);
        assert!(store.get("token-a").await.is_none());
        assert_eq!(session.generation(), generation + 1);
        assert!(!store.end("token-a").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_end_if_rejected_only_on_unauthorized() {
        let store = SessionStore::new();
        store.get_or_create("token-a").await;

        let unavailable = BackendError::Status {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert!(!store.end_if_rejected("token-a", &unavailable).await);
        assert_eq!(store.len().await, 1);

        let rejected = BackendError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(store.end_if_rejected("token-a", &rejected).await);
        assert!(store.is_empty().await);
    }

    #[test]
    fn test_active_sessions_gauge_tracks_store() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

        ::metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                let store = SessionStore::new();
                store.get_or_create("token-a").await;
                store.get_or_create("token-b").await;
                store.get_or_create("token-a").await;
                store.end("token-b").await;
            })
        });

        assert!(handle.render().contains("active_sessions 1"));
    }
}
