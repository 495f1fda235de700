//! Integration tests for filesystem collection feeding the builder

use super::test_utils::scan_dir;
use std::fs;
use tempfile::TempDir;
use treesum::{Collector, CollectorConfig, TreeBuilder, TreeError};

/// Collection order is sorted by path, independent of creation order.
#[test]
fn test_collection_order_is_path_sorted() {
    let (_guard, dir) = scan_dir(&[("z.txt", "z"), ("a.txt", "a"), ("m.txt", "m")]);

    let records = Collector::new().collect(&dir).unwrap();
    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();

    assert_eq!(
        paths,
        vec!["test_dir/a.txt", "test_dir/m.txt", "test_dir/z.txt"]
    );
}

/// Nested directories contribute their files with full relative identifiers.
#[test]
fn test_nested_directories() {
    let (_guard, dir) = scan_dir(&[("top.txt", "t"), ("sub/inner.txt", "i")]);

    let records = Collector::new().collect(&dir).unwrap();
    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();

    assert_eq!(paths, vec!["test_dir/sub/inner.txt", "test_dir/top.txt"]);
}

/// Single-file mode produces a one-record input usable by the builder.
#[test]
fn test_single_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("single.txt");
    fs::write(&file, "lonely").unwrap();

    let records = Collector::new().collect(&file).unwrap();
    let root = TreeBuilder::new().build(records).unwrap();

    assert!(root.is_leaf());
    assert_eq!(
        *root.hash(),
        treesum::tree::hasher::hash_content(b"lonely")
    );
}

/// Ignored directories never reach the tree.
#[test]
fn test_ignore_patterns_respected() {
    let (_guard, dir) = scan_dir(&[("keep.txt", "k"), (".git/config", "g")]);

    let records = Collector::new().collect(&dir).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "test_dir/keep.txt");
}

/// Custom ignore patterns from config are honored.
#[test]
fn test_custom_ignore_patterns() {
    let (_guard, dir) = scan_dir(&[("keep.txt", "k"), ("build/out.bin", "b")]);

    let config = CollectorConfig {
        ignore_patterns: vec!["build".to_string()],
        ..CollectorConfig::default()
    };
    let records = Collector::with_config(config).collect(&dir).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "test_dir/keep.txt");
}

/// A directory whose every entry is ignored yields an empty record list,
/// which the builder rejects rather than fabricating a tree.
#[test]
fn test_fully_ignored_directory_rejected_by_builder() {
    let (_guard, dir) = scan_dir(&[(".git/config", "g")]);

    let records = Collector::new().collect(&dir).unwrap();
    assert!(records.is_empty());

    let result = TreeBuilder::new().build(records);
    assert!(matches!(result, Err(TreeError::EmptyInput)));
}

/// A scan rooted under a `target/` ancestor still fingerprints its files:
/// ignore patterns apply below the scan root, not to the root's location.
#[test]
fn test_scan_under_ignored_name_ancestor_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("target").join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("keep.txt"), "keep").unwrap();

    let records = Collector::new().collect(&root).unwrap();
    assert_eq!(records.len(), 1);

    let tree = TreeBuilder::new().build(records).unwrap();
    assert!(tree.is_leaf());
    assert_eq!(tree.path(), Some("proj/keep.txt"));
}

/// Collaborator I/O errors propagate before any hashing.
#[test]
fn test_io_error_propagation() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let err = Collector::new().collect(&missing).unwrap_err();
    assert!(matches!(err, TreeError::Io(_)));
}
