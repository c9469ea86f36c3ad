use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generates an opaque 256-bit token, hex encoded. Used for both session
/// tokens and OAuth state values.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex_encode(&bytes)
}

/// SHA-256 of the raw token, hex encoded. Only this digest is persisted;
/// a leaked sessions table does not yield usable cookies.
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex_encode(&digest)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
