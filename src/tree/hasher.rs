//! Content hashing using BLAKE3

use crate::types::Digest;
use blake3::Hasher;

/// Hash policy seam for the tree builder.
///
/// Implementations must be deterministic and total: the same byte sequence
/// (including the empty sequence) always maps to the same 256-bit digest,
/// with no side effects. The same hasher is applied to leaf contents and to
/// internal-node concatenations.
pub trait ContentHasher {
    fn hash(&self, data: &[u8]) -> Digest;
}

/// Default content hasher backed by BLAKE3.
#[derive(Debug, Clone, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn hash(&self, data: &[u8]) -> Digest {
        let mut hasher = Hasher::new();
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }
}

/// Compute the content digest of raw bytes with the default hasher.
pub fn hash_content(data: &[u8]) -> Digest {
    Blake3Hasher.hash(data)
}

/// Combine two child digests into a parent digest.
///
/// The parent digest is `hash(left || right)`: raw concatenation, left child
/// first, no separator, length prefix, or domain tag. Known limitation:
/// without domain separation the encoding is ambiguous in adversarial
/// settings; the format is kept stable for fingerprint compatibility rather
/// than hardened.
pub fn combine<H: ContentHasher>(hasher: &H, left: &Digest, right: &Digest) -> Digest {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    hasher.hash(&buf)
}
