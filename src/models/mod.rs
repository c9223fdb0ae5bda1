//! Display models for CLI output
//!
//! Converts decoded catalog types into CLI-friendly rows and pretty views.

pub mod display;

pub use display::{DetailRow, EntityRow, TypeRow};
