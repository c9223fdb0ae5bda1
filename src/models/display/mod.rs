//! Display model implementations for table and JSON output
//!
//! Display models transform catalog types into CLI-friendly formats
//! with appropriate column names and serialization.

pub mod common;
mod entity;
pub mod pretty;

pub use entity::{DetailRow, EntityRow, TypeRow};
