//! Treesum CLI Binary
//!
//! Command-line interface for Merkle-tree content fingerprinting.

use clap::Parser;
use std::process;
use tracing::{error, info};
use treesum::cli::{map_error, Cli, RunContext};
use treesum::config::{ConfigLoader, TreesumConfig};
use treesum::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Load config before logging so the logging section can apply
    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Treesum CLI starting");

    let context = RunContext::new(config);

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
fn build_logging_config(cli: &Cli, config: &TreesumConfig) -> LoggingConfig {
    // If --verbose is not set, disable logging entirely
    if !cli.verbose {
        let mut logging = LoggingConfig::default();
        logging.level = "off".to_string();
        return logging;
    }

    let mut logging = config.logging.clone();

    // CLI arguments take highest priority
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }

    logging
}
