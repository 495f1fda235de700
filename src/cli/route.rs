//! CLI route: dispatches parsed commands to the collector and tree builder.

use crate::cli::parse::{Commands, OutputFormat};
use crate::collect::Collector;
use crate::config::TreesumConfig;
use crate::error::TreeError;
use crate::tree::builder::TreeBuilder;
use crate::tree::render::render_tree;
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Runtime context for CLI execution: resolved configuration only.
pub struct RunContext {
    config: TreesumConfig,
}

impl RunContext {
    pub fn new(config: TreesumConfig) -> Self {
        Self { config }
    }

    /// Execute a command and return its stdout payload.
    pub fn execute(&self, command: &Commands) -> Result<String, TreeError> {
        match command {
            Commands::Hash { path, format } => self.run_hash(path, *format),
            Commands::Tree { path } => self.run_tree(path),
        }
    }

    fn run_hash(&self, path: &Path, format: OutputFormat) -> Result<String, TreeError> {
        let records = self.collect(path)?;
        let file_count = records.len();
        let root = TreeBuilder::new().compute_root(records)?;
        let root_hex = hex::encode(root);

        info!(root = %root_hex, file_count, "Computed fingerprint");

        match format {
            OutputFormat::Text => Ok(root_hex),
            OutputFormat::Json => Ok(json!({
                "root": root_hex,
                "files": file_count,
            })
            .to_string()),
        }
    }

    fn run_tree(&self, path: &Path) -> Result<String, TreeError> {
        let records = self.collect(path)?;
        let root = TreeBuilder::new().build(records)?;
        // render_tree already terminates with a newline; trim so the caller's
        // println does not double it
        Ok(render_tree(&root).trim_end().to_string())
    }

    fn collect(&self, path: &Path) -> Result<Vec<crate::tree::builder::FileData>, TreeError> {
        let collector = Collector::with_config(self.config.collector.clone().into());
        collector.collect(path)
    }
}
