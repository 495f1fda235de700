//! Filesystem collection: turns a file or directory into ordered input records

use crate::error::TreeError;
use crate::tree::builder::FileData;
use crate::tree::path::normalize_path_string;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

/// Collector configuration
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Patterns to ignore (e.g., ".git", "target", "node_modules")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: vec![
                ".git".to_string(),
                "target".to_string(),
                "node_modules".to_string(),
            ],
            max_depth: None,
        }
    }
}

/// Reads file contents from disk and produces the ordered record list the
/// tree builder consumes. Directory scans are sorted by path so the same
/// directory state always yields the same input order.
pub struct Collector {
    config: CollectorConfig,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            config: CollectorConfig::default(),
        }
    }

    pub fn with_config(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Collect records from a single file or a directory tree.
    ///
    /// A file path yields exactly one record. A directory is walked
    /// recursively; only regular files become records. I/O failures
    /// propagate unchanged; no partial result is returned.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn collect(&self, path: &Path) -> Result<Vec<FileData>, TreeError> {
        let metadata = std::fs::metadata(path)?;

        if metadata.is_file() {
            let content = std::fs::read(path)?;
            let identifier = normalize_path_string(&path.to_string_lossy());
            return Ok(vec![FileData::new(identifier, content)]);
        }

        if metadata.is_dir() {
            return self.collect_dir(path);
        }

        Err(TreeError::InvalidPath(format!(
            "{} is neither a file nor a directory",
            path.display()
        )))
    }

    /// Walk a directory and read every regular file into memory.
    ///
    /// Record identifiers are the entry paths relative to the scan root's
    /// parent, so scanning `test_dir` yields identifiers like
    /// `test_dir/f1.txt` regardless of where treesum runs from.
    fn collect_dir(&self, dir: &Path) -> Result<Vec<FileData>, TreeError> {
        let canonical_root = dunce::canonicalize(dir)
            .map_err(|e| TreeError::InvalidPath(format!("{}: {}", dir.display(), e)))?;
        let prefix = canonical_root
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| canonical_root.clone());

        let mut paths: Vec<PathBuf> = Vec::new();

        let walker = WalkDir::new(&canonical_root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io) => TreeError::Io(io),
                None => TreeError::InvalidPath(format!("walk failed under {}", dir.display())),
            })?;

            if self.should_ignore(entry.path(), &canonical_root) {
                continue;
            }
            if entry.file_type().is_file() {
                paths.push(entry.path().to_path_buf());
            }
        }

        // Sort by path for deterministic input order
        paths.sort();
        debug!(file_count = paths.len(), "Collected directory entries");

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let content = std::fs::read(&path)?;
            let relative = path.strip_prefix(&prefix).unwrap_or(&path);
            let identifier = normalize_path_string(&relative.to_string_lossy());
            trace!(path = %identifier, size = content.len(), "Read file");
            records.push(FileData::new(identifier, content));
        }

        Ok(records)
    }

    /// Check if an entry should be ignored based on ignore patterns.
    ///
    /// Patterns apply only to components below the scan root: the root and
    /// its ancestors are the user's choice of what to fingerprint, so a scan
    /// rooted at (or under) a directory named `target` still works.
    fn should_ignore(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        for pattern in &self.config.ignore_patterns {
            for component in relative.components() {
                if let std::path::Component::Normal(name) = component {
                    if name.to_string_lossy() == pattern.as_str() {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}
