// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

pub type TokenDigest = [u8; 32];

/// Fresh session token from the OS RNG.
pub fn new_session_token() -> String {
    generate_token(&mut OsRng, SESSION_TOKEN_BYTES)
}

/// Base64 URL-safe (no padding) encoding of `nbytes` random bytes,
/// so the value can go into a cookie without escaping.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of the raw value. Only digests are kept in memory.
pub fn digest(value: &str) -> TokenDigest {
    Sha256::digest(value.as_bytes()).into()
}

/// Compares every byte regardless of where the first mismatch is.
pub fn digests_match(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
