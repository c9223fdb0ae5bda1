//! PokeAPI client
//!
//! The `Transport` trait is the network seam: `HttpTransport` talks to the real
//! API, the test-only `MockTransport` serves scripted payloads. Everything above
//! it (fetcher, batching, catalog) is generic over the transport.

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::RequestSignature;
use crate::error::ApiError;

pub mod batch;
pub mod catalog;
pub mod fallback;
#[cfg(test)]
pub mod fixtures;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod rate_limit;

pub use batch::BatchOptions;
pub use catalog::Catalog;
pub use fallback::FallbackStore;
pub use http::HttpTransport;
#[cfg(test)]
pub use mock::MockTransport;

/// Default PokeAPI base URL
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// A single network round trip for one request signature.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET the resource and parse the body as JSON.
    ///
    /// Any non-2xx status, transport failure, or non-JSON body is an error.
    async fn get_json(&self, signature: &RequestSignature) -> Result<Value, ApiError>;
}
