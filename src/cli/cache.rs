//! Cache management commands

use crate::cache::DurableCache;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::{cache_dir, resolve_config};
use crate::error::Result;

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let config = resolve_config(opts)?;
    let dir = cache_dir(&config)?;
    let cache = DurableCache::open_at(&dir)?.with_quota(config.cache.quota_bytes);
    let stats = cache.stats()?;

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "total_entries": stats.total_entries,
                "total_size_bytes": stats.total_size_bytes,
                "total_size_human": format_size(stats.total_size_bytes),
                "quota_bytes": stats.quota_bytes,
                "durable_enabled": config.cache.durable,
                "oldest_entry_timestamp": stats.oldest_entry,
                "newest_entry_timestamp": stats.newest_entry,
                "path": dir.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("Cache Status");
            println!("────────────────────────────────────────");
            println!("Location:       {}", dir.display());
            println!(
                "Durable tier:   {}",
                if config.cache.durable { "on" } else { "off" }
            );
            println!("Entries:        {}", stats.total_entries);
            println!("Total size:     {}", format_size(stats.total_size_bytes));

            if let Some(quota) = stats.quota_bytes {
                println!("Quota:          {}", format_size(quota as usize));
            }

            if let Some(oldest) = stats.oldest_entry {
                println!("Oldest entry:   {}", format_local(oldest));
            }

            if let Some(newest) = stats.newest_entry {
                println!("Newest entry:   {}", format_local(newest));
            }
        }
    }

    Ok(())
}

/// Clear all cache entries
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let config = resolve_config(opts)?;
    let cache = DurableCache::open_at(&cache_dir(&config)?)?;
    let stats = cache.clear_all()?;

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries_removed": stats.entries_removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            if stats.entries_removed > 0 {
                println!("Cleared {} cache entries", stats.entries_removed);
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show cache path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let config = resolve_config(opts)?;
    println!("{}", cache_dir(&config)?.display());
    Ok(())
}

/// Unix seconds as local "YYYY-MM-DD HH:MM"
fn format_local(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|d| {
            d.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Format bytes as human-readable size
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_format_local_invalid() {
        assert_eq!(format_local(i64::MAX), "unknown");
    }
}
