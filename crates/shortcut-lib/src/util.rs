//! Bookmark ID generation.
//!
//! IDs look like `bm-k3x9qa`: the prefix plus base36 characters taken from a
//! SHA-256 digest of the card's title, URL and creation time.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Prefix for generated bookmark IDs.
pub const ID_PREFIX: &str = "bm";

/// Number of base36 characters after the prefix.
pub const ID_HASH_LEN: usize = 6;

/// Collisions tolerated at one length before the suffix grows by a character.
const ATTEMPTS_PER_LENGTH: u32 = 100;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a bookmark ID that `exists` does not report as taken.
///
/// The same inputs always yield the same first candidate. On collision a
/// nonce is mixed into the digest; after repeated collisions the suffix is
/// lengthened.
pub fn generate_id<F>(title: &str, url: &str, created_at: DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let stamp = created_at.timestamp_nanos_opt().unwrap_or_default();
    let mut nonce = 0u32;
    loop {
        let len = ID_HASH_LEN + (nonce / ATTEMPTS_PER_LENGTH) as usize;
        let id = format!("{ID_PREFIX}-{}", digest_suffix(title, url, stamp, nonce, len));
        if !exists(&id) {
            return id;
        }
        tracing::trace!(id, nonce, "Bookmark ID collision");
        nonce = nonce.wrapping_add(1);
    }
}

/// Base36 rendering of the digest, one character per digest byte.
///
/// Lengths past the 32-byte digest wrap around to its start.
fn digest_suffix(title: &str, url: &str, stamp: i64, nonce: u32, len: usize) -> String {
    let digest = Sha256::new()
        .chain_update(title.as_bytes())
        .chain_update([0u8])
        .chain_update(url.as_bytes())
        .chain_update([0u8])
        .chain_update(stamp.to_le_bytes())
        .chain_update(nonce.to_le_bytes())
        .finalize();

    digest
        .iter()
        .cycle()
        .take(len)
        .map(|byte| char::from(BASE36[usize::from(*byte) % BASE36.len()]))
        .collect()
}
