//! Directory scanning functionality
//!
//! This module contains functions for listing one level of a directory and
//! classifying what was found.

use std::ffi::OsString;
use std::fs::{self, DirEntry, read_dir};
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{Result, directory_access_error};

/// What an entry turned out to be when it was listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file, or a link to one
    File,
    /// A directory, or a link to one
    Directory,
    /// Anything else (sockets, devices, dangling links)
    Other,
}

/// Information about an entry found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The path to the entry
    pub path: PathBuf,
    /// The final path component, as the operating system returned it
    pub name: OsString,
    /// File, directory or neither, following symbolic links
    pub kind: EntryKind,
    /// Whether the entry itself is a symbolic link
    pub is_symlink: bool,
}

impl DirectoryEntry {
    fn from_dir_entry(entry: &DirEntry) -> Self {
        let path = entry.path();
        let is_symlink = entry
            .file_type()
            .map(|file_type| file_type.is_symlink())
            .unwrap_or(false);
        let kind = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            Ok(metadata) if metadata.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        };

        DirectoryEntry {
            path,
            name: entry.file_name(),
            kind,
            is_symlink,
        }
    }

    /// The name as a string, or `None` when it is not valid Unicode
    pub fn utf8_name(&self) -> Option<&str> {
        self.name.to_str()
    }
}

/// Lists the immediate entries of a directory
///
/// The whole listing is collected before returning, so callers may rename
/// entries without the listing yielding them a second time. Names are kept
/// as the operating system returned them, valid Unicode or not. The order
/// is whatever the operating system yields.
///
/// # Errors
/// Returns a directory access error if the directory cannot be opened
pub fn scan_directory(directory: &Path) -> Result<Vec<DirectoryEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let listing =
        read_dir(directory).map_err(|e| directory_access_error(e, directory.to_path_buf()))?;

    let mut entries = Vec::new();
    for item in listing {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {e}", directory.display());
                continue;
            }
        };
        entries.push(DirectoryEntry::from_dir_entry(&item));
    }

    debug!("Found {} entries in directory", entries.len());

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs::{File, create_dir};
    use tempfile::tempdir;

    #[test]
    fn test_scan_directory_classifies_entries() {
        let temp_dir = tempdir().unwrap();
        File::create(temp_dir.path().join("a b.txt")).unwrap();
        create_dir(temp_dir.path().join("sub dir")).unwrap();

        let mut entries = scan_directory(temp_dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a b.txt");
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].name, "sub dir");
        assert_eq!(entries[1].kind, EntryKind::Directory);
        assert_eq!(entries[1].path, temp_dir.path().join("sub dir"));
    }

    #[test]
    fn test_scan_directory_is_not_recursive() {
        let temp_dir = tempdir().unwrap();
        create_dir(temp_dir.path().join("nested")).unwrap();
        File::create(temp_dir.path().join("nested").join("inner.txt")).unwrap();

        let entries = scan_directory(temp_dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "nested");
    }

    #[test]
    fn test_scan_missing_directory_is_access_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let result = scan_directory(&missing);
        match result {
            Err(Error::DirectoryAccess { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected a directory access error, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_file_is_access_error() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("plain.txt");
        File::create(&file).unwrap();

        assert!(matches!(
            scan_directory(&file),
            Err(Error::DirectoryAccess { .. })
        ));
    }

    #[test]
    fn test_entry_names_as_unicode() {
        let temp_dir = tempdir().unwrap();
        File::create(temp_dir.path().join("notes.md")).unwrap();

        let entries = scan_directory(temp_dir.path()).unwrap();
        assert_eq!(entries[0].utf8_name(), Some("notes.md"));
        assert!(!entries[0].is_symlink);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_directories_are_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = tempdir().unwrap();
        let name = OsStr::from_bytes(b"dir\xff");
        if create_dir(temp_dir.path().join(name)).is_err() {
            // Filesystem only accepts Unicode names
            return;
        }

        let entries = scan_directory(temp_dir.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, name);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[0].utf8_name(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_follow_their_target_kind() {
        use std::os::unix::fs::symlink;

        let temp_dir = tempdir().unwrap();
        create_dir(temp_dir.path().join("real")).unwrap();
        symlink(temp_dir.path().join("real"), temp_dir.path().join("link")).unwrap();
        symlink(temp_dir.path().join("gone"), temp_dir.path().join("dangling")).unwrap();

        let mut entries = scan_directory(temp_dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<_> = entries.iter().map(|entry| entry.utf8_name()).collect();
        assert_eq!(names, vec![Some("dangling"), Some("link"), Some("real")]);

        assert_eq!(entries[0].kind, EntryKind::Other);
        assert!(entries[0].is_symlink);
        assert_eq!(entries[1].kind, EntryKind::Directory);
        assert!(entries[1].is_symlink);
        assert_eq!(entries[2].kind, EntryKind::Directory);
        assert!(!entries[2].is_symlink);
    }
}
