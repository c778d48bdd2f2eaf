use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the exact markup bytes.
#[must_use]
pub fn content_id(markup: &str) -> String {
    hex::encode(Sha256::digest(markup.as_bytes()))
}
