//! Collection page model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// Lightweight pointer to an entity, as listed on a collection page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReference {
    pub name: String,
    pub url: String,
}

/// One page of a collection endpoint (`/pokemon`, `/type`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionPage {
    /// Total size of the collection; `/type` omits it
    #[serde(default)]
    pub count: Option<u32>,

    pub results: Vec<EntityReference>,
}

impl CollectionPage {
    /// Decode a raw collection payload.
    pub fn decode(payload: &Value) -> Result<Self, DecodeError> {
        CollectionPage::deserialize(payload).map_err(|e| DecodeError::new("collection", e))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}
