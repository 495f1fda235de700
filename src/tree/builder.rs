//! Tree builder: positional pairing of content hashes into a Merkle root

use crate::error::TreeError;
use crate::tree::hasher::{combine, Blake3Hasher, ContentHasher};
use crate::tree::node::MerkleNode;
use crate::types::Digest;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// One input record: an identifier (typically a file path) and its raw
/// content. Identifiers need not be unique; duplicates are hashed
/// independently. Content may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub path: String,
    pub content: Vec<u8>,
}

impl FileData {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Builds a binary Merkle tree over an ordered list of input records.
///
/// Pairing is strictly positional: nodes are combined two at a time in input
/// order, never sorted or reordered, so the same ordered inputs always
/// produce the same root and a reordering generally changes it. An unpaired
/// final node at an odd level is carried up unchanged into the next level.
pub struct TreeBuilder<H = Blake3Hasher> {
    hasher: H,
}

impl TreeBuilder {
    /// Create a builder using the default BLAKE3 hasher.
    pub fn new() -> Self {
        Self {
            hasher: Blake3Hasher,
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ContentHasher> TreeBuilder<H> {
    /// Create a builder with a custom content hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Build the full tree and return its root node.
    ///
    /// Fails with `TreeError::EmptyInput` before any hashing if `files` is
    /// empty; a single record yields a one-node tree whose root is the leaf
    /// itself.
    #[instrument(skip(self, files), fields(file_count = files.len()))]
    pub fn build(&self, files: Vec<FileData>) -> Result<MerkleNode, TreeError> {
        let start = Instant::now();
        info!("Starting tree build");

        let mut level = self.leaves(files)?;
        let mut levels = 0usize;

        while level.len() > 1 {
            level = self.combine_level(level);
            levels += 1;
        }

        // leaves() guarantees at least one node
        match level.pop() {
            Some(root) => {
                info!(
                    levels,
                    root = %hex::encode(root.hash()),
                    duration_ms = start.elapsed().as_millis(),
                    "Tree build completed"
                );
                Ok(root)
            }
            None => Err(TreeError::EmptyInput),
        }
    }

    /// Build the tree and return only the root digest.
    pub fn compute_root(&self, files: Vec<FileData>) -> Result<Digest, TreeError> {
        let root = self.build(files)?;
        Ok(*root.hash())
    }

    /// Convert input records into leaf nodes, preserving input order.
    fn leaves(&self, files: Vec<FileData>) -> Result<Vec<MerkleNode>, TreeError> {
        if files.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        let leaves = files
            .into_iter()
            .map(|file| {
                let hash = self.hasher.hash(&file.content);
                trace!(path = %file.path, hash = %hex::encode(hash), "Hashed leaf");
                MerkleNode::leaf(file.path, hash)
            })
            .collect::<Vec<_>>();

        debug!(leaf_count = leaves.len(), "Built leaf level");
        Ok(leaves)
    }

    /// Reduce one level to the next: fixed left-to-right pairs, odd node
    /// carried up unchanged (never re-hashed or paired with itself).
    fn combine_level(&self, level: Vec<MerkleNode>) -> Vec<MerkleNode> {
        let mut next = Vec::with_capacity(level.len() / 2 + 1);
        let mut nodes = level.into_iter();

        while let Some(left) = nodes.next() {
            match nodes.next() {
                Some(right) => {
                    let hash = combine(&self.hasher, left.hash(), right.hash());
                    next.push(MerkleNode::internal(hash, left, right));
                }
                None => next.push(left),
            }
        }

        next
    }
}
