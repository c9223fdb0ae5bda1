//! Command execution context
//!
//! Loads configuration, applies global flag overrides, and wires the tiered
//! fetcher and catalog that every loading command uses.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};

use crate::cache::{DurableCache, ResourceFetcher, VolatileCache};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{Catalog, FallbackStore, HttpTransport};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, catalog, and runtime options.
pub struct CommandContext {
    /// Configuration with flag overrides applied
    pub config: Config,
    /// Catalog over the live transport (Arc-wrapped so loads can run on a task)
    pub catalog: Arc<Catalog<HttpTransport>>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A durable cache that cannot be opened is logged and skipped; the
    /// in-memory tier, network, and fallback still work without it.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or is invalid, or the HTTP
    /// client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;

        let transport = HttpTransport::new(&config.api_base_url, config.timeout())?;
        let durable = open_durable(opts, &config);
        let fallback = FallbackStore::from_dir(config.mock_dir.as_deref());

        debug!(
            "Catalog at {} (fallback: {}, durable cache: {})",
            config.api_base_url,
            fallback.describe(),
            if durable.is_some() { "on" } else { "off" }
        );

        let fetcher = ResourceFetcher::new(
            transport,
            Arc::new(VolatileCache::new()),
            durable,
            fallback,
        );
        let catalog = Arc::new(Catalog::new(Arc::new(fetcher), config.batch_options()));

        Ok(Self {
            config,
            catalog,
            format: opts.format,
        })
    }
}

/// Load the config file and layer flag/env overrides on top.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load(opts.config_ref())?;

    if let Some(ref base) = opts.api_base {
        config.api_base_url = base.clone();
    }
    if let Some(ref dir) = opts.mock_dir {
        config.mock_dir = Some(dir.clone());
    }
    if let Some(ref dir) = opts.cache_dir {
        config.cache_dir = Some(dir.clone());
    }
    if opts.no_cache {
        config.cache.durable = false;
    }

    config.validate()?;
    Ok(config)
}

/// Durable cache directory: flag/env, then config, then the user cache dir.
pub fn cache_dir(config: &Config) -> Result<PathBuf> {
    match config.cache_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => Ok(DurableCache::default_dir()?),
    }
}

fn open_durable(opts: &GlobalOptions, config: &Config) -> Option<DurableCache> {
    if opts.no_cache || !config.cache.durable {
        return None;
    }

    let opened = cache_dir(config).and_then(|dir| Ok(DurableCache::open_at(&dir)?));
    match opened {
        Ok(cache) => Some(cache.with_quota(config.cache.quota_bytes)),
        Err(e) => {
            warn!("Durable cache unavailable, continuing without it: {}", e);
            None
        }
    }
}
