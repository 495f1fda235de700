//! Treesum: Merkle-Tree Content Fingerprints
//!
//! Computes a single content fingerprint for a set of files by building a
//! binary Merkle tree over their contents: leaves hash raw file bytes,
//! internal nodes hash the concatenation of their children's digests, and
//! the root digest summarizes the whole set.

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;

pub use collect::{Collector, CollectorConfig};
pub use error::TreeError;
pub use tree::builder::{FileData, TreeBuilder};
pub use tree::node::MerkleNode;
pub use tree::render::render_tree;
pub use types::Digest;
