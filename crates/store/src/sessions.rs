//! Server-side session store.
//!
//! Sessions are keyed by the SHA-256 digest of the session token; the
//! plaintext token only ever lives in the client's cookie. Like the entity
//! store, sessions are in-memory only and vanish on restart.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use kbase_core::types::{DbId, Timestamp};

/// A live login session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// Token-digest-keyed session map.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under the given token digest.
    pub fn insert(&self, token_hash: String, user_id: DbId) {
        let session = Session {
            user_id,
            created_at: Utc::now(),
        };
        self.sessions.write().unwrap().insert(token_hash, session);
    }

    /// Look up the session for a token digest.
    pub fn resolve(&self, token_hash: &str) -> Option<Session> {
        self.sessions.read().unwrap().get(token_hash).cloned()
    }

    /// Revoke a session. Returns whether a session existed.
    pub fn revoke(&self, token_hash: &str) -> bool {
        self.sessions.write().unwrap().remove(token_hash).is_some()
    }
}
