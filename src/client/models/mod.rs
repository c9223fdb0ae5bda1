//! PokeAPI data models
//!
//! The fetch layer hands out raw JSON; these types decode it with explicit
//! validation and return `DecodeError` on shape mismatch.

mod entity;
mod page;

pub use entity::{Entity, Stat};
pub use page::{CollectionPage, EntityReference};
