//! Entity display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{
    format_base_experience, format_dex_number, format_height, format_types, format_weight,
};
use crate::client::models::{Entity, Stat};
use crate::index::Neighbors;

/// One row of the list/gallery table.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EntityRow {
    #[tabled(rename = "#")]
    pub id: u32,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPES")]
    pub types: String,

    #[tabled(rename = "BASE EXP")]
    pub base_experience: String,
}

impl From<&Entity> for EntityRow {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            types: format_types(&entity.types),
            base_experience: format_base_experience(entity.base_experience),
        }
    }
}

/// Field/value row for the detail view in table format
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DetailRow {
    #[tabled(rename = "FIELD")]
    pub field: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl DetailRow {
    fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// All detail rows for one entity, navigation last
    pub fn rows_for(entity: &Entity, neighbors: &Neighbors) -> Vec<Self> {
        let mut rows = vec![
            Self::new("number", format_dex_number(entity.id)),
            Self::new("name", entity.name.clone()),
            Self::new("types", format_types(&entity.types)),
            Self::new("height", format_height(entity.height)),
            Self::new("weight", format_weight(entity.weight)),
            Self::new(
                "base experience",
                format_base_experience(entity.base_experience),
            ),
        ];
        rows.extend(entity.stats.iter().map(DetailRow::from));
        if let Some(ref artwork) = entity.artwork {
            rows.push(Self::new("artwork", artwork.clone()));
        }
        rows.push(Self::new("prev", neighbors.prev.to_string()));
        rows.push(Self::new("next", neighbors.next.to_string()));
        rows
    }
}

impl From<&Stat> for DetailRow {
    fn from(stat: &Stat) -> Self {
        Self::new(stat.name.clone(), stat.base.to_string())
    }
}

/// Type tag row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TypeRow {
    #[tabled(rename = "TYPE")]
    pub name: String,
}

impl From<String> for TypeRow {
    fn from(name: String) -> Self {
        Self { name }
    }
}
