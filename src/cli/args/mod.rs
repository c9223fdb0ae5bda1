//! Shared CLI argument types
//!
//! This module contains reusable argument types shared by several commands.

mod common;
mod global;

pub use common::{OutputFormat, SortDir, SortField};
pub use global::GlobalOptions;
