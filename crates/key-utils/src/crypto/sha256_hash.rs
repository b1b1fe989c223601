use sha2::{Digest, Sha256};

/// Compute the SHA256 hash of a given input.
pub fn sha256_hash(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}
