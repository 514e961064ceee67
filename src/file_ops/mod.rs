//! File operations module
//!
//! This module contains the rename operation applied to a single entry.

mod actions;

pub use actions::{FileActionResult, rename_entry};
