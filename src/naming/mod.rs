//! Name transformation module
//!
//! This module contains the pure function that maps an entry name to its new name.

mod transformer;

pub use transformer::{NamePattern, transform};
