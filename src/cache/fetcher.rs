//! Tiered resource fetcher
//!
//! Resolves one request signature through, in order: the volatile cache, the
//! durable cache, the network, and the static fallback tree. Network successes
//! back-fill both caches; fallback payloads only ever reach the volatile cache.

use std::sync::{Arc, Mutex};

use log::{debug, warn};
use serde_json::Value;

use crate::cache::{DurableCache, RequestSignature, VolatileCache};
use crate::client::{FallbackStore, Transport};
use crate::error::FetchError;

/// Fetcher over any `Transport`, sharing caches across all concurrent fetches.
///
/// The durable tier is optional (disabled for `--no-cache`) and wrapped in a
/// Mutex for thread-safety.
pub struct ResourceFetcher<T: Transport> {
    transport: Arc<T>,
    volatile: Arc<VolatileCache>,
    durable: Option<Mutex<DurableCache>>,
    fallback: FallbackStore,
}

impl<T: Transport> ResourceFetcher<T> {
    pub fn new(
        transport: T,
        volatile: Arc<VolatileCache>,
        durable: Option<DurableCache>,
        fallback: FallbackStore,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            volatile,
            durable: durable.map(Mutex::new),
            fallback,
        }
    }

    /// The shared volatile cache
    #[cfg(test)]
    pub fn volatile(&self) -> &Arc<VolatileCache> {
        &self.volatile
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve a signature to its raw payload.
    pub async fn fetch(&self, signature: &RequestSignature) -> Result<Value, FetchError> {
        let key = signature.key();

        if let Some(hit) = self.volatile.get(&key) {
            debug!("Volatile cache hit: {}", key);
            return Ok(hit);
        }

        if let Some(hit) = self.durable_get(&key) {
            debug!("Durable cache hit: {}", key);
            self.volatile.insert(&key, hit.clone());
            return Ok(hit);
        }

        match self.transport.get_json(signature).await {
            Ok(payload) => {
                debug!("Fetched {} from network", key);
                self.volatile.insert(&key, payload.clone());
                self.durable_put(&key, signature.path(), &payload);
                Ok(payload)
            }
            Err(cause) => match self.fallback.load(signature.path()) {
                Ok(payload) => {
                    debug!("Network failed for {} ({}), serving fallback", key, cause);
                    self.volatile.insert(&key, payload.clone());
                    Ok(payload)
                }
                Err(fallback_err) => {
                    debug!("No usable fallback for {}: {}", key, fallback_err);
                    Err(FetchError::NetworkFailure {
                        signature: key,
                        cause,
                    })
                }
            },
        }
    }

    /// Durable lookup; unreadable or undecodable entries count as misses
    fn durable_get(&self, key: &str) -> Option<Value> {
        let cache = self.durable.as_ref()?;
        let guard = cache.lock().ok()?;
        let bytes = match guard.get(key) {
            Ok(bytes) => bytes?,
            Err(e) => {
                warn!("Durable cache read failed for {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    /// Best-effort durable write; failures are logged, never returned
    fn durable_put(&self, key: &str, resource: &str, payload: &Value) {
        let Some(ref cache) = self.durable else {
            return;
        };
        let Ok(guard) = cache.lock() else {
            return;
        };
        let result = serde_json::to_vec(payload)
            .map_err(|e| crate::error::CacheError::Io(e.to_string()))
            .and_then(|bytes| guard.put(key, &bytes, resource));
        if let Err(e) = result {
            warn!("Durable cache write failed for {}: {}", key, e);
        }
    }

    #[cfg(test)]
    fn durable_contains(&self, key: &str) -> bool {
        self.durable
            .as_ref()
            .and_then(|cache| cache.lock().ok())
            .and_then(|guard| guard.contains(key).ok())
            .unwrap_or(false)
    }
}
