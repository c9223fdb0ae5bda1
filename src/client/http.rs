//! HTTP transport for PokeAPI

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use super::Transport;
use super::rate_limit::ReactiveLimiter;
use crate::cache::RequestSignature;
use crate::error::ApiError;

/// Fixed request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// reqwest-backed transport
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
    limiter: ReactiveLimiter,
}

impl HttpTransport {
    /// Create a transport against `base_url` (e.g. `https://pokeapi.co/api/v2`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("dexview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            limiter: ReactiveLimiter::default(),
        })
    }

    /// Absolute URL for a signature, without the query string
    fn url_for(&self, signature: &RequestSignature) -> String {
        format!("{}{}", self.base_url, signature.path())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, signature: &RequestSignature) -> Result<Value, ApiError> {
        self.limiter.wait_if_active().await;

        let url = self.url_for(signature);
        debug!("GET {} {}", url, signature.query());

        let response = self
            .http
            .get(&url)
            .query(signature.params())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            status if status.is_success() => response.json::<Value>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            }),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(signature.path().to_string())),
            StatusCode::TOO_MANY_REQUESTS => {
                self.limiter.activate();
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)))
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg))
            }
            _ => Err(ApiError::InvalidResponse(format!(
                "Unexpected status code: {}",
                status
            ))),
        }
    }
}
