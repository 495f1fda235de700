//! Merkle node model: leaves carry a path, internal nodes carry children.

use crate::types::Digest;

/// A node in the Merkle tree.
///
/// A node is a leaf iff it has a path iff it has no children; it is internal
/// iff it has children iff its path is absent. Nodes are immutable once
/// constructed and own their subtrees exclusively, so dropping the root frees
/// the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleNode {
    hash: Digest,
    path: Option<String>,
    left: Option<Box<MerkleNode>>,
    right: Option<Box<MerkleNode>>,
}

impl MerkleNode {
    /// Create a leaf node for one input record.
    pub fn leaf(path: String, hash: Digest) -> Self {
        Self {
            hash,
            path: Some(path),
            left: None,
            right: None,
        }
    }

    /// Create an internal node combining a full pair of children.
    pub fn internal(hash: Digest, left: MerkleNode, right: MerkleNode) -> Self {
        Self {
            hash,
            path: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// The node's digest. For the root this is the tree's fingerprint.
    pub fn hash(&self) -> &Digest {
        &self.hash
    }

    /// Source identifier, present on leaves only.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn left(&self) -> Option<&MerkleNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&MerkleNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of leaves under this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left.as_ref().map_or(0, |n| n.leaf_count())
            + self.right.as_ref().map_or(0, |n| n.leaf_count())
    }
}
