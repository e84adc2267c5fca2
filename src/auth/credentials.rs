// src/auth/credentials.rs
use crate::auth::token::{digest, digests_match, TokenDigest};
use crate::config::AdminConfig;

/// Decides whether a login attempt may open an admin session.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// The single configured admin account.
pub struct StaticCredentials {
    username: TokenDigest,
    password: TokenDigest,
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: digest(username),
            password: digest(password),
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(&config.username, &config.password)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // evaluate both so timing does not reveal which one was wrong
        let user_ok = digests_match(&self.username, &digest(username));
        let pass_ok = digests_match(&self.password, &digest(password));
        user_ok & pass_ok
    }
}
