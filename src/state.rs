// state.rs
use crate::auth::{CredentialVerifier, SessionStore};
use crate::listings::{ListingCache, ListingFeed};

/// Everything a request handler may touch, shared by all worker threads.
pub struct AppState {
    pub cache: Box<dyn ListingCache>,
    pub feed: Box<dyn ListingFeed>,
    pub credentials: Box<dyn CredentialVerifier>,
    pub sessions: SessionStore,
    /// Adds `Secure` to the session cookie.
    pub secure_cookies: bool,
}
