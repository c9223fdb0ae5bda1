//! Error types for dexview

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for dexview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A batch load resolved zero entities
    #[error("No {0} could be loaded")]
    EmptyResult(String),

    /// A top-level load failed; `message` is what the user sees
    #[error("{message}")]
    Load {
        message: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("Load cancelled")]
    Cancelled,

    #[error("Operation failed: {0}")]
    Other(String),
}

impl Error {
    /// Wrap this error behind a user-facing message.
    pub fn presented(self, message: &'static str) -> Self {
        match self {
            // Cancellation already reads well on its own.
            Error::Cancelled => Error::Cancelled,
            other => Error::Load {
                message,
                source: Box::new(other),
            },
        }
    }
}

/// Upstream API errors (the cause carried by a network failure)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Errors from a single resource fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request for {signature} failed: {cause}")]
    NetworkFailure {
        signature: String,
        #[source]
        cause: ApiError,
    },

    #[error("No fallback data at {0}")]
    FallbackMissing(PathBuf),

    #[error("Fallback data at {path} is malformed: {reason}")]
    FallbackParseError { path: PathBuf, reason: String },
}

/// Raw payload did not match the expected shape
#[derive(Debug, Error)]
#[error("Invalid {resource} payload: {reason}")]
pub struct DecodeError {
    pub resource: &'static str,
    pub reason: String,
}

impl DecodeError {
    pub fn new(resource: &'static str, err: impl std::fmt::Display) -> Self {
        Self {
            resource,
            reason: err.to_string(),
        }
    }
}

/// Durable cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine cache directory")]
    NoHome,

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Cache database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Cache quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: u64, quota: u64 },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
