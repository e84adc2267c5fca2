pub mod cookies;
pub mod credentials;
pub mod sessions;
pub mod token;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use sessions::SessionStore;
