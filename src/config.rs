//! Configuration System
//!
//! Layered configuration: serde defaults, then an optional TOML file
//! (explicit path or `treesum.toml` in the working directory), then
//! environment overrides of the form `TREESUM__<SECTION>__<KEY>`.

use crate::collect::CollectorConfig;
use crate::error::TreeError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreesumConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Collector settings
    #[serde(default)]
    pub collector: CollectorSettings,
}

/// Collector settings as they appear in configuration files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorSettings {
    #[serde(default)]
    pub follow_symlinks: bool,

    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_ignore_patterns() -> Vec<String> {
    CollectorConfig::default().ignore_patterns
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: default_ignore_patterns(),
            max_depth: None,
        }
    }
}

impl From<CollectorSettings> for CollectorConfig {
    fn from(settings: CollectorSettings) -> Self {
        Self {
            follow_symlinks: settings.follow_symlinks,
            ignore_patterns: settings.ignore_patterns,
            max_depth: settings.max_depth,
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, optionally from an explicit file path.
    ///
    /// With no explicit path, `treesum.toml` in the working directory is
    /// used if present; missing files fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<TreesumConfig, TreeError> {
        let mut builder = Config::builder();

        match path {
            Some(explicit) => {
                let name = explicit
                    .to_str()
                    .ok_or_else(|| TreeError::InvalidPath(format!("{:?}", explicit)))?;
                builder = builder.add_source(File::with_name(name).required(true));
            }
            None => {
                builder = builder.add_source(File::with_name("treesum").required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("TREESUM")
                .prefix_separator("__")
                .separator("__"),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
