//! Workflow module
//!
//! This module contains the tree walk that ties listing, name transformation
//! and renaming together.

mod context;
mod engine;

pub use context::{PlannedRename, WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, process_tree, rename_tree};
