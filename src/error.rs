//! Error types for the treesum fingerprinting tool.

use thiserror::Error;

/// Errors surfaced by collection and tree construction.
///
/// Hashing and pairing are total over in-memory bytes; the only failure the
/// core itself can produce is `EmptyInput`. Everything else comes from the
/// filesystem collector and is propagated unchanged, before any hashing.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Cannot build a tree from zero input records")]
    EmptyInput,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for TreeError {
    fn from(err: config::ConfigError) -> Self {
        TreeError::Config(err.to_string())
    }
}
