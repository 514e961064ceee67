//! Configuration data structures
//!
//! `Settings` holds the raw, layered values an operator supplied; validating
//! it produces the immutable `RenameRequest` consumed by the tree renamer.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{DEFAULT_DIRECTORY, DEFAULT_REPLACE, DEFAULT_SEARCH};
use crate::errors::{Error, Result, invalid_directory_error};
use crate::utils::expand_directory;

/// Defaults read from a YAML file
///
/// Every key is optional; missing keys keep the built-in defaults.
///
/// ```yaml
/// search: "-"
/// replace: " "
/// recurse: false
/// rename_directories: true
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub search: Option<String>,
    pub replace: Option<String>,
    pub recurse: Option<bool>,
    pub rename_directories: Option<bool>,
}

/// Unvalidated settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory as typed by the operator, `~` not yet expanded
    pub directory: String,
    pub search: String,
    pub replace: String,
    pub recurse_subdirectories: bool,
    pub rename_directories: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            directory: DEFAULT_DIRECTORY.to_string(),
            search: DEFAULT_SEARCH.to_string(),
            replace: DEFAULT_REPLACE.to_string(),
            recurse_subdirectories: true,
            rename_directories: false,
        }
    }
}

impl Settings {
    /// Overrides the built-in values with whatever the defaults file sets
    pub fn with_defaults(mut self, defaults: &Defaults) -> Self {
        if let Some(search) = &defaults.search {
            self.search = search.clone();
        }
        if let Some(replace) = &defaults.replace {
            self.replace = replace.clone();
        }
        if let Some(recurse) = defaults.recurse {
            self.recurse_subdirectories = recurse;
        }
        if let Some(rename_directories) = defaults.rename_directories {
            self.rename_directories = rename_directories;
        }
        self
    }

    /// Validates the settings and turns them into a request
    ///
    /// # Errors
    /// * Returns `InvalidDirectory` if the directory does not exist or is not a directory
    /// * Returns `EmptySearch` if the search token is empty
    pub fn validate(&self) -> Result<RenameRequest> {
        let root = expand_directory(&self.directory);
        if !root.is_dir() {
            return Err(invalid_directory_error(root));
        }

        RenameRequest::new(
            root,
            &self.search,
            &self.replace,
            self.recurse_subdirectories,
            self.rename_directories,
        )
    }
}

/// Everything the tree renamer needs for one run
///
/// The search token is guaranteed to be non-empty. The root is not checked
/// for existence; an inaccessible root is reported by the walk itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    root: PathBuf,
    search: String,
    replace: String,
    recurse_subdirectories: bool,
    rename_directories: bool,
}

impl RenameRequest {
    /// Creates a request
    ///
    /// # Errors
    /// Returns `EmptySearch` if `search` is empty
    pub fn new(
        root: impl Into<PathBuf>,
        search: &str,
        replace: &str,
        recurse_subdirectories: bool,
        rename_directories: bool,
    ) -> Result<Self> {
        if search.is_empty() {
            return Err(Error::EmptySearch);
        }

        Ok(RenameRequest {
            root: root.into(),
            search: search.to_string(),
            replace: replace.to_string(),
            recurse_subdirectories,
            rename_directories,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }

    pub fn recurse_subdirectories(&self) -> bool {
        self.recurse_subdirectories
    }

    pub fn rename_directories(&self) -> bool {
        self.rename_directories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.directory, ".");
        assert_eq!(settings.search, " ");
        assert_eq!(settings.replace, "_");
        assert!(settings.recurse_subdirectories);
        assert!(!settings.rename_directories);
    }

    #[test]
    fn test_with_defaults_overrides_only_set_keys() {
        let defaults = Defaults {
            search: Some("-".to_string()),
            replace: None,
            recurse: Some(false),
            rename_directories: None,
        };

        let settings = Settings::default().with_defaults(&defaults);

        assert_eq!(settings.search, "-");
        assert_eq!(settings.replace, "_");
        assert!(!settings.recurse_subdirectories);
        assert!(!settings.rename_directories);
    }

    #[test]
    fn test_validate_builds_request() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            directory: temp_dir.path().to_string_lossy().to_string(),
            rename_directories: true,
            ..Settings::default()
        };

        let request = settings.validate().unwrap();

        assert_eq!(request.root(), temp_dir.path());
        assert_eq!(request.search(), " ");
        assert_eq!(request.replace(), "_");
        assert!(request.recurse_subdirectories());
        assert!(request.rename_directories());
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            directory: temp_dir.path().join("missing").to_string_lossy().to_string(),
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidDirectory { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_search() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            directory: temp_dir.path().to_string_lossy().to_string(),
            search: String::new(),
            ..Settings::default()
        };

        assert!(matches!(settings.validate(), Err(Error::EmptySearch)));
    }

    #[test]
    fn test_request_allows_empty_replacement() {
        let request = RenameRequest::new("/nowhere", "-", "", false, false).unwrap();
        assert_eq!(request.replace(), "");
        assert_eq!(request.root(), Path::new("/nowhere"));
    }

    #[test]
    fn test_request_rejects_empty_search() {
        assert!(matches!(
            RenameRequest::new("/nowhere", "", "_", true, false),
            Err(Error::EmptySearch)
        ));
    }
}
