//! Entity (pokemon) model and decoding

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// A fully hydrated catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// National dex number
    pub id: u32,

    /// Display name (lowercase, as served)
    pub name: String,

    /// Height in decimetres
    pub height: u32,

    /// Weight in hectograms
    pub weight: u32,

    /// Base experience yield; the API serves null for some forms
    pub base_experience: Option<u32>,

    /// Type names ordered by slot
    pub types: Vec<String>,

    /// Base stats in API order
    pub stats: Vec<Stat>,

    /// Official artwork URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}

/// One named base stat
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

impl Entity {
    /// Decode a raw `/pokemon/{id}` payload.
    pub fn decode(payload: &Value) -> Result<Self, DecodeError> {
        let wire = EntityWire::deserialize(payload).map_err(|e| DecodeError::new("entity", e))?;
        Ok(wire.into())
    }

    /// Whether this entity carries the type tag
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

#[derive(Deserialize)]
struct EntityWire {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    base_experience: Option<u32>,
    #[serde(default)]
    types: Vec<TypeSlotWire>,
    #[serde(default)]
    stats: Vec<StatWire>,
    #[serde(default)]
    sprites: Option<SpritesWire>,
}

#[derive(Deserialize)]
struct NamedWire {
    name: String,
}

#[derive(Deserialize)]
struct TypeSlotWire {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedWire,
}

#[derive(Deserialize)]
struct StatWire {
    base_stat: u32,
    stat: NamedWire,
}

#[derive(Deserialize)]
struct SpritesWire {
    #[serde(default)]
    other: Option<OtherSpritesWire>,
}

#[derive(Deserialize)]
struct OtherSpritesWire {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<ArtworkWire>,
}

#[derive(Deserialize)]
struct ArtworkWire {
    #[serde(default)]
    front_default: Option<String>,
}

impl From<EntityWire> for Entity {
    fn from(wire: EntityWire) -> Self {
        let mut slots = wire.types;
        slots.sort_by_key(|t| t.slot);

        let artwork = wire
            .sprites
            .and_then(|s| s.other)
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);

        Self {
            id: wire.id,
            name: wire.name,
            height: wire.height,
            weight: wire.weight,
            base_experience: wire.base_experience,
            types: slots.into_iter().map(|t| t.kind.name).collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base: s.base_stat,
                })
                .collect(),
            artwork,
        }
    }
}
