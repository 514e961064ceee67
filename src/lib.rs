//! Replaces a token in file and directory names across a directory tree
//!
//! The library is split the way a run flows:
//! - [`config`] layers built-in defaults, a defaults file, command-line values
//!   and interactive answers into a validated [`config::RenameRequest`]
//! - [`workflow`] walks the tree, using [`discovery`] to list directories,
//!   [`naming`] to compute new names and [`file_ops`] to rename entries
//!
//! ```no_run
//! use file_rename::config::RenameRequest;
//! use file_rename::workflow::rename_tree;
//!
//! let request = RenameRequest::new("/tmp/photos", " ", "_", true, false)?;
//! let count = rename_tree(&request);
//! println!("{count} files renamed");
//! # Ok::<(), file_rename::errors::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod naming;
pub mod utils;
pub mod workflow;

