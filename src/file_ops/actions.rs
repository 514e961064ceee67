//! Rename functionality
//!
//! This module contains the function that renames one entry in place,
//! keeping it in the same parent directory.

use std::fs::{rename, symlink_metadata};
use std::path::{Path, PathBuf, is_separator};

use log::debug;

use crate::errors::{RenameFailure, Result, rename_error};

/// Result of renaming an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileActionResult {
    /// The path before the rename
    pub source_path: PathBuf,
    /// The path after the rename
    pub target_path: PathBuf,
    /// Whether the rename actually happened (false in simulation mode)
    pub performed: bool,
}

/// Renames an entry to `new_name` inside its current parent directory
///
/// The target is refused when it is empty, contains a path separator, or
/// names an entry that already exists. On case-insensitive filesystems a
/// case-only rename finds the source itself under the new name; that target
/// is not another entry, so the rename goes ahead.
///
/// # Arguments
/// * `source_path` - The entry to rename
/// * `new_name` - The new final path component
/// * `run_execution` - Whether to actually perform the rename (true) or just simulate it (false)
///
/// # Errors
/// * Returns a rename error if the target is refused or the operating system rejects the rename
pub fn rename_entry(
    source_path: &Path,
    new_name: &str,
    run_execution: bool,
) -> Result<FileActionResult> {
    let target_path = source_path.with_file_name(new_name);

    if new_name.is_empty() || new_name.chars().any(is_separator) {
        return Err(rename_error(
            source_path.to_path_buf(),
            target_path,
            RenameFailure::InvalidTargetName,
        ));
    }

    if symlink_metadata(&target_path).is_ok() && !is_same_entry(source_path, &target_path) {
        return Err(rename_error(
            source_path.to_path_buf(),
            target_path,
            RenameFailure::TargetExists,
        ));
    }

    if !run_execution {
        debug!(
            "Simulating rename: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(FileActionResult {
            source_path: source_path.to_path_buf(),
            target_path,
            performed: false,
        });
    }

    debug!(
        "Renaming: {} -> {}",
        source_path.display(),
        target_path.display()
    );
    rename(source_path, &target_path).map_err(|e| {
        rename_error(
            source_path.to_path_buf(),
            target_path.clone(),
            RenameFailure::Io(e),
        )
    })?;

    Ok(FileActionResult {
        source_path: source_path.to_path_buf(),
        target_path,
        performed: true,
    })
}

/// Whether two paths name the very same directory entry
#[cfg(unix)]
fn is_same_entry(source_path: &Path, target_path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (symlink_metadata(source_path), symlink_metadata(target_path)) {
        (Ok(source), Ok(target)) => source.dev() == target.dev() && source.ino() == target.ino(),
        _ => false,
    }
}

/// Whether two paths name the very same directory entry
#[cfg(not(unix))]
fn is_same_entry(source_path: &Path, target_path: &Path) -> bool {
    use std::fs::canonicalize;

    match (canonicalize(source_path), canonicalize(target_path)) {
        (Ok(source), Ok(target)) => source == target,
        _ => false,
    }
}
