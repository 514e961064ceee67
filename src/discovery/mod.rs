//! Entry discovery module
//!
//! This module contains components for listing directories and classifying their entries.

mod scanner;

pub use scanner::{DirectoryEntry, EntryKind, scan_directory};
