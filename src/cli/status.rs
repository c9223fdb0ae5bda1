//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::{cache_dir, resolve_config};
use crate::client::FallbackStore;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "dexview Configuration Status".bold());

    let config_path = match opts.config_ref() {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };

    // An explicit path that does not exist fails in resolve_config below
    if config_path.exists() || opts.config.is_some() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    let config = resolve_config(opts)?;
    println!();

    println!("{} API base: {}", "○".dimmed(), config.api_base_url);
    println!("{} Timeout: {}s", "○".dimmed(), config.timeout_secs);
    println!(
        "{} Load limit: {} (batches of {}, {}ms stagger, {}ms pause)",
        "○".dimmed(),
        config.load_limit,
        config.batch.size,
        config.batch.stagger_ms,
        config.batch.pause_ms
    );

    let fallback = FallbackStore::from_dir(config.mock_dir.as_deref());
    match config.mock_dir {
        Some(ref dir) if !dir.is_dir() => {
            println!("{} Fallback data missing: {}", "⚠".yellow(), dir.display());
            println!("  → Network failures will not be recoverable");
        }
        _ => println!("{} Fallback data: {}", "✓".green(), fallback.describe()),
    }

    if config.cache.durable {
        let dir = cache_dir(&config)?;
        println!("{} Durable cache: {}", "✓".green(), dir.display());
        if let Some(quota) = config.cache.quota_bytes {
            println!("  → Quota: {} bytes", quota);
        }
    } else {
        println!("{} Durable cache disabled", "○".dimmed());
    }

    println!();
    Ok(())
}
