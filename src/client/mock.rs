//! Mock transport for testing
//!
//! Serves scripted payloads keyed by resource path (query ignored) and records
//! every call so tests can assert how often the network was reached.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::Transport;
use crate::cache::RequestSignature;
use crate::error::ApiError;

/// Mock transport for testing.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_response("/pokemon/1", json!({"id": 1}))
///     .with_failure("/pokemon/2");
/// ```
#[derive(Default)]
pub struct MockTransport {
    /// Payloads by resource path
    responses: HashMap<String, Value>,
    /// Paths that always fail
    failures: HashSet<String>,
    /// Artificial latency per call
    latency: Option<Duration>,
    /// Calls per signature key
    calls: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for requests to `path`.
    pub fn with_response(mut self, path: &str, payload: Value) -> Self {
        self.responses
            .insert(RequestSignature::new(path, &[]).path().to_string(), payload);
        self
    }

    /// Fail every request to `path` with a server error.
    pub fn with_failure(mut self, path: &str) -> Self {
        self.failures
            .insert(RequestSignature::new(path, &[]).path().to_string());
        self
    }

    /// Sleep this long inside every call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of calls made for one signature
    pub async fn call_count(&self, signature: &RequestSignature) -> usize {
        let calls = self.calls.lock().await;
        calls.get(&signature.key()).copied().unwrap_or(0)
    }

    /// Number of calls made in total
    pub async fn total_calls(&self) -> usize {
        let calls = self.calls.lock().await;
        calls.values().sum()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, signature: &RequestSignature) -> Result<Value, ApiError> {
        {
            let mut calls = self.calls.lock().await;
            *calls.entry(signature.key()).or_insert(0) += 1;
        }

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.failures.contains(signature.path()) {
            return Err(ApiError::ServerError(format!(
                "scripted failure for {}",
                signature.path()
            )));
        }

        self.responses
            .get(signature.path())
            .cloned()
            .ok_or_else(|| ApiError::NotFound(signature.path().to_string()))
    }
}
