// src/auth/sessions.rs
use crate::auth::token::{digest, new_session_token, TokenDigest};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// One day, matching the cookie's Max-Age.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24;

/// Admin sessions held in process memory, keyed by token digest.
///
/// Restarting the server logs everyone out.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<TokenDigest, i64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token valid until `now + SESSION_TTL_SECS`. Expired entries
    /// are dropped on the way.
    pub fn create(&self, now: i64) -> String {
        let token = new_session_token();
        let mut sessions = self.lock();
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.insert(digest(&token), now + SESSION_TTL_SECS);
        token
    }

    pub fn is_valid(&self, token: &str, now: i64) -> bool {
        self.lock()
            .get(&digest(token))
            .is_some_and(|expires_at| *expires_at > now)
    }

    pub fn revoke(&self, token: &str) {
        self.lock().remove(&digest(token));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<TokenDigest, i64>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
