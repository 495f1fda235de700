//! Core types for treesum.

/// Digest: 256-bit hash value produced by the content hasher
pub type Digest = [u8; 32];
