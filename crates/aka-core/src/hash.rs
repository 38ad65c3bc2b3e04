//! Stable key hashing.
//!
//! Each component is written into a blake3 hasher behind its byte length, so
//! `("ab", "c")` and `("a", "bc")` hash different inputs.

/// Number of hex characters in a full blake3 digest.
pub const MAX_KEY_LENGTH: usize = 64;

/// Hash `id` within `scope` and return the first `len` hex characters.
///
/// `len` is clamped to [`MAX_KEY_LENGTH`].
#[must_use]
pub fn stable_key(id: &str, scope: &str, len: usize) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in [id, scope] {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }

    let mut digest = hex::encode(hasher.finalize().as_bytes());
    digest.truncate(len.min(MAX_KEY_LENGTH));
    digest
}
