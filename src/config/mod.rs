//! Configuration management for dexview

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::http::DEFAULT_TIMEOUT;
use crate::client::{BatchOptions, DEFAULT_API_BASE};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API base URL
    #[serde(default = "default_api_base")]
    pub api_base_url: String,

    /// Per-request network timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Root of the static fallback tree; the bundled tree when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_dir: Option<PathBuf>,

    /// Durable cache location; the user cache directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// How many entries list and gallery load
    #[serde(default = "default_load_limit")]
    pub load_limit: u32,

    #[serde(default)]
    pub batch: BatchSettings,

    #[serde(default)]
    pub cache: CacheSettings,
}

/// Detail-loading pace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSettings {
    #[serde(default = "default_batch_size")]
    pub size: usize,

    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,

    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

/// Durable cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_true")]
    pub durable: bool,

    /// Byte quota for stored payloads; writes past it are skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<u64>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_load_limit() -> u32 {
    151
}

fn default_batch_size() -> usize {
    25
}

fn default_stagger_ms() -> u64 {
    15
}

fn default_pause_ms() -> u64 {
    150
}

fn default_true() -> bool {
    true
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            size: default_batch_size(),
            stagger_ms: default_stagger_ms(),
            pause_ms: default_pause_ms(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            durable: true,
            quota_bytes: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            timeout_secs: default_timeout_secs(),
            mock_dir: None,
            cache_dir: None,
            load_limit: default_load_limit(),
            batch: BatchSettings::default(),
            cache: CacheSettings::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".dexview").join("config.yaml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the default path is tried, and a
    /// missing default file yields the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".to_string()).into());
        }
        if self.load_limit == 0 {
            return Err(ConfigError::Invalid("load_limit must be positive".to_string()).into());
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            ))
            .into());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            batch_size: self.batch.size,
            stagger: Duration::from_millis(self.batch.stagger_ms),
            pause: Duration::from_millis(self.batch.pause_ms),
        }
    }
}
