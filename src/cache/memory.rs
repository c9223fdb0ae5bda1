//! In-process response cache
//!
//! Lives as long as the value that owns it. Construct one per application run
//! and share it by `Arc`; nothing is evicted.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

/// Map from signature key to raw response payload.
#[derive(Debug, Default)]
pub struct VolatileCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl VolatileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the cached payload, if any.
    pub fn get(&self, key: &str) -> Option<Value> {
        let guard = self.entries.read().ok()?;
        guard.get(key).cloned()
    }

    /// Store a payload. Last writer wins.
    pub fn insert(&self, key: &str, value: Value) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(key.to_string(), value);
        }
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|guard| guard.contains_key(key))
            .unwrap_or(false)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
