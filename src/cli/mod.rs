//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod cache;
pub mod completions;
pub mod context;
pub mod gallery;
pub mod handlers;
pub mod list;
pub mod show;
pub mod status;
pub mod types;

pub use args::{OutputFormat, SortDir, SortField};
pub use context::CommandContext;

/// dexview - browse the PokeAPI catalog from the terminal, with offline fallback data
#[derive(Parser, Debug)]
#[command(name = "dexview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "DEXVIEW_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "DEXVIEW_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DEXVIEW_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Skip the on-disk cache (in-memory caching still applies)
    #[arg(long, global = true, env = "DEXVIEW_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Override the API base URL
    #[arg(long, global = true, env = "DEXVIEW_API_BASE", hide_env = true)]
    pub api_base: Option<String>,

    /// Override the fallback data directory
    #[arg(long, global = true, env = "DEXVIEW_MOCK_DIR", hide_env = true)]
    pub mock_dir: Option<PathBuf>,

    /// Override the on-disk cache directory
    #[arg(long, global = true, env = "DEXVIEW_CACHE_DIR", hide_env = true)]
    pub cache_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and sort the first entries of the catalog
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            dexview list                          # First 151, by name\n  \
            dexview list -q char --sort id        # Name or number contains 'char'\n  \
            dexview list --sort base-exp --order desc -n 50\n  \
            dexview list -q saur --ids-only       # Navigation order for 'show --ids'"
    )]
    List(ListArgs),

    /// Browse entries filtered by type
    #[command(after_help = "EXAMPLES:\n  \
            dexview gallery                       # All types\n  \
            dexview gallery -t grass,poison       # Entries with BOTH types\n  \
            dexview gallery -t fire,water,fire    # Clicking a chip again turns it off\n  \
            dexview gallery -t fire,clear,grass   # 'clear' drops earlier chips")]
    Gallery {
        /// Type chips to click, in order (all active ones must match); comma-separated or repeated
        #[arg(long = "type", short = 't', value_delimiter = ',')]
        types: Vec<String>,

        /// How many entries to load (defaults to config load_limit)
        #[arg(long, short = 'n')]
        limit: Option<u32>,
    },

    /// Show one entry with prev/next navigation
    #[command(
        visible_alias = "get",
        after_help = "EXAMPLES:\n  \
            dexview show 25                       # By number\n  \
            dexview show pikachu                  # By name\n  \
            dexview show 5 --ids 1,4,7,10         # prev/next within a list order"
    )]
    Show {
        /// Dex number or name
        entry: String,

        /// Navigation order as comma-separated ids (as printed by `list --ids-only`)
        #[arg(long)]
        ids: Option<String>,
    },

    /// List type tags usable as gallery filters
    Types,

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Show resolved configuration
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Install:
  bash:   dexview completion bash > /etc/bash_completion.d/dexview
  zsh:    dexview completion zsh > \"${fpath[1]}/_dexview\"
  fish:   dexview completion fish > ~/.config/fish/completions/dexview.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `list`
#[derive(Debug, Clone, Args, Default)]
pub struct ListArgs {
    /// Filter by name or number (substring, case-insensitive)
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Sort field
    #[arg(long, value_enum, default_value = "name")]
    pub sort: SortField,

    /// Sort direction
    #[arg(long, value_enum, default_value = "asc")]
    pub order: SortDir,

    /// How many entries to load (defaults to config load_limit)
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Print only the comma-separated id order of the result
    #[arg(long)]
    pub ids_only: bool,
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,
    /// Clear all cached data
    Clear,
    /// Print cache directory path
    Path,
}
