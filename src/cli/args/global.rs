//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into one struct so handlers take a single
//! parameter instead of threading each flag through.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.dexview/config.yaml)
    pub config: Option<PathBuf>,

    /// Skip the durable cache tier entirely
    pub no_cache: bool,

    /// API base URL override
    pub api_base: Option<String>,

    /// Fallback tree override
    pub mock_dir: Option<PathBuf>,

    /// Durable cache directory override
    pub cache_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            no_cache: cli.no_cache,
            api_base: cli.api_base.clone(),
            mock_dir: cli.mock_dir.clone(),
            cache_dir: cli.cache_dir.clone(),
        }
    }

    /// Get config path as `Option<&Path>`.
    pub fn config_ref(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}
