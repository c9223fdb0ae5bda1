//! Test fixtures and builders for API payloads
//!
//! Provides builder patterns for creating raw JSON payloads and decoded
//! entities with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use serde_json::{Value, json};

use super::models::{Entity, Stat};

// ============================================================================
// EntityJson
// ============================================================================

/// Builder for raw `/pokemon/{id}` payloads.
///
/// # Example
/// ```ignore
/// let payload = EntityJson::new(4, "charmander")
///     .types(&["fire"])
///     .base_experience(62)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct EntityJson {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    base_experience: Option<u32>,
    types: Vec<String>,
    stats: Vec<(String, u32)>,
    artwork: Option<String>,
}

impl EntityJson {
    /// Create a new builder with the given id and name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            height: 7,
            weight: 69,
            base_experience: None,
            types: Vec::new(),
            stats: Vec::new(),
            artwork: None,
        }
    }

    /// Set type names in slot order.
    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn base_experience(mut self, value: u32) -> Self {
        self.base_experience = Some(value);
        self
    }

    pub fn height(mut self, value: u32) -> Self {
        self.height = value;
        self
    }

    pub fn weight(mut self, value: u32) -> Self {
        self.weight = value;
        self
    }

    /// Append a base stat.
    pub fn stat(mut self, name: &str, base: u32) -> Self {
        self.stats.push((name.to_string(), base));
        self
    }

    pub fn artwork(mut self, url: &str) -> Self {
        self.artwork = Some(url.to_string());
        self
    }

    /// Build the raw payload in PokeAPI shape.
    pub fn build(self) -> Value {
        let types: Vec<Value> = self
            .types
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "slot": i + 1,
                    "type": {"name": name, "url": format!("https://pokeapi.co/api/v2/type/{}/", name)}
                })
            })
            .collect();

        let stats: Vec<Value> = self
            .stats
            .iter()
            .map(|(name, base)| json!({"base_stat": base, "effort": 0, "stat": {"name": name, "url": ""}}))
            .collect();

        json!({
            "id": self.id,
            "name": self.name,
            "height": self.height,
            "weight": self.weight,
            "base_experience": self.base_experience,
            "types": types,
            "stats": stats,
            "sprites": {
                "front_default": null,
                "other": {"official-artwork": {"front_default": self.artwork}}
            }
        })
    }
}

// ============================================================================
// Collection payloads
// ============================================================================

/// Raw `/pokemon?offset&limit` payload listing `names` with sequential ids.
pub fn collection_json(names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({"name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1)})
        })
        .collect();

    json!({"count": names.len(), "next": null, "previous": null, "results": results})
}

/// Raw `/type` payload.
pub fn type_list_json(names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| json!({"name": name, "url": format!("https://pokeapi.co/api/v2/type/{}/", name)}))
        .collect();

    json!({"count": names.len(), "results": results})
}

// ============================================================================
// Decoded entities
// ============================================================================

/// Decoded entity with the given types and base experience.
pub fn entity(id: u32, name: &str, types: &[&str], base_experience: Option<u32>) -> Entity {
    Entity {
        id,
        name: name.to_string(),
        height: 10,
        weight: 100,
        base_experience,
        types: types.iter().map(|t| t.to_string()).collect(),
        stats: vec![Stat {
            name: "hp".to_string(),
            base: 50,
        }],
        artwork: None,
    }
}
