//! Shared command handlers

pub mod load;

pub use load::run_load;
