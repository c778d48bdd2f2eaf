use sha2::{Digest, Sha256};

/// Derives the walk seed for a `(symbol, timeframe)` pair.
///
/// The seed is the first 8 bytes of `SHA-256("<symbol>:<timeframe>")` read as a
/// big-endian `u64`, so identical inputs always map to the identical series.
#[must_use]
pub fn derive_seed(symbol: &str, timeframe: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(symbol.as_bytes());
    hasher.update(b":");
    hasher.update(timeframe.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0_u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
