//! Diagnostic tree rendering

use crate::tree::node::MerkleNode;
use std::fmt::Write;

/// Render the tree as an indented, newline-separated dump.
///
/// Pre-order, left then right, matching construction order. Internal nodes
/// print only their hex digest; leaves print `path: hex`. Indentation is one
/// tab per depth level, root at depth zero.
pub fn render_tree(node: &MerkleNode) -> String {
    let mut out = String::new();
    render_node(node, 0, &mut out);
    out
}

fn render_node(node: &MerkleNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push('\t');
    }
    match node.path() {
        Some(path) => {
            let _ = writeln!(out, "{}: {}", path, hex::encode(node.hash()));
        }
        None => {
            let _ = writeln!(out, "{}", hex::encode(node.hash()));
        }
    }
    if let Some(left) = node.left() {
        render_node(left, depth + 1, out);
    }
    if let Some(right) = node.right() {
        render_node(right, depth + 1, out);
    }
}
