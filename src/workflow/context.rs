//! Workflow context
//!
//! This module defines the state accumulated while a tree is renamed.

use std::fmt::Write;
use std::path::PathBuf;

use crate::discovery::EntryKind;
use crate::errors::Error;
use crate::file_ops::FileActionResult;

/// Represents a planned rename for dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// The current path of the entry
    pub source: PathBuf,
    /// The path the entry would be renamed to
    pub destination: PathBuf,
    /// Whether the entry is a file or a directory
    pub kind: EntryKind,
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of directories whose listing was attempted
    pub directories_visited: usize,
    /// Number of files renamed
    pub files_renamed: usize,
    /// Number of directories renamed
    pub directories_renamed: usize,
    /// Number of renames that failed and were skipped
    pub rename_failures: usize,
}

/// Context for the workflow
///
/// The renamed count only ever grows during a run.
#[derive(Debug)]
pub struct WorkflowContext {
    /// Whether renames are only simulated
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Directories that could not be entered, in the order they were met
    pub directory_errors: Vec<Error>,
    /// Planned renames for dry-run mode
    pub planned_operations: Vec<PlannedRename>,
}

impl WorkflowContext {
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            stats: WorkflowStats::default(),
            directory_errors: Vec::new(),
            planned_operations: Vec::new(),
        }
    }

    /// Total number of renamed entries, files and directories together
    pub fn renamed_count(&self) -> usize {
        self.stats.files_renamed + self.stats.directories_renamed
    }

    /// Counts a successful (or, in dry-run mode, planned) rename
    pub fn record_rename(&mut self, kind: EntryKind, result: &FileActionResult) {
        match kind {
            EntryKind::Directory => self.stats.directories_renamed += 1,
            _ => self.stats.files_renamed += 1,
        }

        if self.dry_run {
            self.planned_operations.push(PlannedRename {
                source: result.source_path.clone(),
                destination: result.target_path.clone(),
                kind,
            });
        }
    }

    pub fn increment_directories_visited(&mut self) {
        self.stats.directories_visited += 1;
    }

    pub fn increment_rename_failures(&mut self) {
        self.stats.rename_failures += 1;
    }

    pub fn add_directory_error(&mut self, error: Error) {
        self.directory_errors.push(error);
    }

    /// The closing line shown to the operator, e.g. " 3 files renamed "
    pub fn summary(&self) -> String {
        let count = self.renamed_count();
        let noun = if count == 1 { "file" } else { "files" };
        let verb = if self.dry_run {
            "would be renamed"
        } else {
            "renamed"
        };
        format!(" {count} {noun} {verb} ")
    }

    /// The summary centred in a line of asterisks
    pub fn banner(&self) -> String {
        format!("{:*^100}", self.summary())
    }

    /// Human readable list of planned renames, grouped by kind
    pub fn plan_report(&self) -> String {
        let mut report = String::new();
        if self.planned_operations.is_empty() {
            return report;
        }

        let _ = writeln!(report, "\nDetailed plan of operations:");
        let _ = writeln!(report, "===========================");

        let sections = [
            (EntryKind::Directory, "Directories to be renamed:"),
            (EntryKind::File, "Files to be renamed:"),
        ];
        for (kind, title) in sections {
            let operations: Vec<&PlannedRename> = self
                .planned_operations
                .iter()
                .filter(|op| op.kind == kind)
                .collect();
            if operations.is_empty() {
                continue;
            }
            let _ = writeln!(report, "\n{title}");
            let _ = writeln!(report, "{}", "-".repeat(title.len()));
            for op in operations {
                let _ = writeln!(report, "  From: {}", op.source.display());
                let _ = writeln!(report, "  To:   {}", op.destination.display());
            }
        }

        let _ = writeln!(report, "\nRun without --dry flag to execute these operations.");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(source: &str, target: &str) -> FileActionResult {
        FileActionResult {
            source_path: PathBuf::from(source),
            target_path: PathBuf::from(target),
            performed: true,
        }
    }

    #[test]
    fn test_record_rename_counts_by_kind() {
        let mut context = WorkflowContext::new(false);

        context.record_rename(EntryKind::File, &action("a b", "a_b"));
        context.record_rename(EntryKind::File, &action("c d", "c_d"));
        context.record_rename(EntryKind::Directory, &action("e f", "e_f"));

        assert_eq!(context.stats.files_renamed, 2);
        assert_eq!(context.stats.directories_renamed, 1);
        assert_eq!(context.renamed_count(), 3);
        assert!(context.planned_operations.is_empty());
    }

    #[test]
    fn test_dry_run_records_plan() {
        let mut context = WorkflowContext::new(true);

        context.record_rename(EntryKind::Directory, &action("/t/e f", "/t/e_f"));
        context.record_rename(EntryKind::File, &action("/t/a b", "/t/a_b"));

        assert_eq!(context.planned_operations.len(), 2);
        let report = context.plan_report();
        assert!(report.contains("Directories to be renamed:"));
        assert!(report.contains("Files to be renamed:"));
        assert!(report.contains("From: /t/a b"));
        assert!(report.contains("To:   /t/a_b"));
    }

    #[test]
    fn test_summary_wording() {
        let mut context = WorkflowContext::new(false);
        assert_eq!(context.summary(), " 0 files renamed ");

        context.record_rename(EntryKind::File, &action("a b", "a_b"));
        assert_eq!(context.summary(), " 1 file renamed ");

        let dry = WorkflowContext::new(true);
        assert_eq!(dry.summary(), " 0 files would be renamed ");
    }

    #[test]
    fn test_banner_is_centred() {
        let context = WorkflowContext::new(false);
        let banner = context.banner();

        assert_eq!(banner.chars().count(), 100);
        assert!(banner.starts_with("****"));
        assert!(banner.ends_with("****"));
        assert!(banner.contains(" 0 files renamed "));
    }

    #[test]
    fn test_empty_plan_report() {
        assert!(WorkflowContext::new(true).plan_report().is_empty());
    }
}
