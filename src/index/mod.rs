//! In-memory views over loaded entities
//!
//! Everything here is pure: search and sort, type filtering, prev/next
//! resolution, and the generation tokens that decide whether a finished load
//! may still replace the working set.

pub mod filter;
pub mod generation;
pub mod navigation;
pub mod search;

pub use filter::{CLEAR_CHIP, TypeSelection, filter_by_types};
pub use generation::{Latest, LoadGeneration};
pub use navigation::{Neighbors, format_id_list, parse_id_list, resolve_neighbors};
pub use search::{SortDirection, SortKey, search_and_sort};
