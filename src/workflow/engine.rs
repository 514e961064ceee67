//! Workflow engine
//!
//! This module contains the engine that walks a directory tree and renames
//! matching entries.

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::{debug, error, info, trace, warn};

use crate::config::RenameRequest;
use crate::discovery::{DirectoryEntry, EntryKind, scan_directory};
use crate::errors::invalid_filename_error;
use crate::file_ops::{FileActionResult, rename_entry};
use crate::logging::format_message;
use crate::naming::NamePattern;

use super::context::WorkflowContext;

/// Options for processing a tree
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Whether to only simulate the renames
    pub dry_run: bool,
}

/// Renames every matching entry below the request's root and returns the count
///
/// Shorthand for [`process_tree`] without dry-run.
pub fn rename_tree(request: &RenameRequest) -> usize {
    process_tree(request, &ProcessingOptions::default()).renamed_count()
}

/// Walks the tree described by the request and renames matching entries
///
/// Each directory is handled completely before any of its subdirectories:
/// files are renamed, directories are renamed when requested, and every
/// subdirectory is queued under its name after the rename. Subdirectories
/// are then visited in listing order, each subtree finished before the
/// next one starts.
///
/// Failures never abort the run. A directory that cannot be listed is
/// logged and recorded in the returned context and its subtree is skipped;
/// an entry that cannot be renamed keeps its name and is not counted.
/// Entries whose names are not valid Unicode are never renamed, but such
/// directories are still visited.
///
/// Symbolic links to directories are renamed like directories but never
/// descended into, so a link pointing back up the tree cannot loop the walk.
pub fn process_tree(request: &RenameRequest, options: &ProcessingOptions) -> WorkflowContext {
    let pattern = NamePattern::new(request.search());
    let mut context = WorkflowContext::new(options.dry_run);

    info!(
        "Replacing {:?} with {:?} in {}{}...",
        request.search(),
        request.replace(),
        request.root().display(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let mut pending: Vec<PathBuf> = vec![request.root().to_path_buf()];
    while let Some(directory) = pending.pop() {
        let subdirectories = process_directory(&directory, request, &pattern, &mut context);
        if request.recurse_subdirectories() {
            // Reversed so the first listed subdirectory is popped first
            pending.extend(subdirectories.into_iter().rev());
        }
    }

    debug!(
        "Visited {} directories, {} renames failed",
        context.stats.directories_visited, context.stats.rename_failures
    );

    context
}

/// Handles the immediate entries of one directory and returns the subdirectories to visit
fn process_directory(
    directory: &Path,
    request: &RenameRequest,
    pattern: &NamePattern,
    context: &mut WorkflowContext,
) -> Vec<PathBuf> {
    context.increment_directories_visited();

    let entries = match scan_directory(directory) {
        Ok(entries) => entries,
        Err(e) => {
            error!("{e}");
            context.add_directory_error(e);
            return Vec::new();
        }
    };

    let mut subdirectories = Vec::new();
    for entry in entries {
        let name = entry.utf8_name();
        if name.is_none() && entry.kind != EntryKind::Other {
            warn!("Not renaming: {}", invalid_filename_error(entry.path.clone()));
        }

        match entry.kind {
            EntryKind::Directory => {
                let mut current = entry.path.clone();
                if request.rename_directories()
                    && let Some(name) = name
                    && pattern.matches(name)
                    && let Some(result) = try_rename(&entry, name, request, pattern, context)
                    && result.performed
                {
                    current = result.target_path;
                }

                if entry.is_symlink {
                    debug!("Not descending into symbolic link {}", current.display());
                } else {
                    subdirectories.push(current);
                }
            }
            EntryKind::File => {
                if let Some(name) = name
                    && pattern.matches(name)
                {
                    try_rename(&entry, name, request, pattern, context);
                }
            }
            EntryKind::Other => {
                trace!("Skipping {}, neither file nor directory", entry.path.display());
            }
        }
    }

    subdirectories
}

/// Renames one entry, recording the outcome
///
/// Returns `None` when the name would not change or the rename failed.
fn try_rename(
    entry: &DirectoryEntry,
    name: &str,
    request: &RenameRequest,
    pattern: &NamePattern,
    context: &mut WorkflowContext,
) -> Option<FileActionResult> {
    let new_name = pattern.apply(name, request.replace());
    if new_name == name {
        debug!("Name unchanged, skipping {}", entry.path.display());
        return None;
    }

    match rename_entry(&entry.path, &new_name, !context.dry_run) {
        Ok(result) => {
            context.record_rename(entry.kind, &result);
            let verb = if result.performed {
                "Renamed"
            } else {
                "Would rename"
            };
            let message = format!("{verb}: {name} -> {new_name}");
            let colored_message = format!("{verb}: {name} -> {}", new_name.bold().green());
            info!("{}", format_message(&message, &colored_message));
            Some(result)
        }
        Err(e) => {
            debug!("{e}");
            context.increment_rename_failures();
            None
        }
    }
}
