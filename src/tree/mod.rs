//! Binary Merkle tree over file contents
//!
//! Leaves hash raw file bytes; internal nodes hash the concatenation of
//! their children's digests. The root digest is the fingerprint of the
//! whole input set.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod path;
pub mod render;
