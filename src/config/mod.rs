//! Configuration module
//!
//! This module contains components for collecting, layering and validating
//! the settings of a run.

mod loader;
mod model;
pub mod prompt;

pub use loader::{load_defaults, resolve_defaults};
pub use model::{Defaults, RenameRequest, Settings};
pub use prompt::PromptSession;
