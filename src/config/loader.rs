//! Defaults file loading
//!
//! This module contains functions for locating and reading the YAML defaults file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::from_str;

use crate::errors::{Result, config_parsing_error};
use crate::utils::default_defaults_file;

use super::model::Defaults;

/// Loads defaults from a YAML file
///
/// An empty file yields empty defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid YAML for `Defaults`
pub fn load_defaults(file: &Path) -> Result<Defaults> {
    let content = fs::read_to_string(file).map_err(|e| {
        config_parsing_error(e, &format!("Failed to read defaults file {}", file.display()))
    })?;

    if content.trim().is_empty() {
        return Ok(Defaults::default());
    }

    from_str(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse defaults file {}. Please check the YAML syntax.",
                file.display()
            ),
        )
    })
}

/// Resolves which defaults to use for this run
///
/// An explicitly requested file must exist. Without one, the defaults file in
/// the configuration directory is used when present.
///
/// # Errors
/// Returns an error if the chosen file cannot be read or parsed
pub fn resolve_defaults(explicit: Option<&str>) -> Result<Defaults> {
    let file: Option<PathBuf> = match explicit {
        Some(path) => Some(PathBuf::from(shellexpand::tilde(path).into_owned())),
        None => default_defaults_file().filter(|path| path.is_file()),
    };

    match file {
        Some(path) => {
            debug!("Reading defaults from {}", path.display());
            load_defaults(&path)
        }
        None => {
            debug!("No defaults file found, using built-in defaults");
            Ok(Defaults::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs::write;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("defaults.yaml");
        write(
            &file,
            "search: \"-\"\nreplace: \" \"\nrecurse: false\nrename_directories: true\n",
        )
        .unwrap();

        let defaults = load_defaults(&file).unwrap();

        assert_eq!(defaults.search.as_deref(), Some("-"));
        assert_eq!(defaults.replace.as_deref(), Some(" "));
        assert_eq!(defaults.recurse, Some(false));
        assert_eq!(defaults.rename_directories, Some(true));
    }

    #[test]
    fn test_load_partial_and_empty_defaults() {
        let temp_dir = tempdir().unwrap();
        let partial = temp_dir.path().join("partial.yaml");
        write(&partial, "replace: \".\"\n").unwrap();
        let empty = temp_dir.path().join("empty.yaml");
        write(&empty, "").unwrap();

        let defaults = load_defaults(&partial).unwrap();
        assert_eq!(defaults.replace.as_deref(), Some("."));
        assert_eq!(defaults.search, None);

        assert_eq!(load_defaults(&empty).unwrap(), Defaults::default());
    }

    #[test]
    fn test_load_defaults_rejects_unknown_keys() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("defaults.yaml");
        write(&file, "serach: \"-\"\n").unwrap();

        assert!(matches!(
            load_defaults(&file),
            Err(Error::ConfigParsing { .. })
        ));
    }

    #[test]
    fn test_resolve_missing_explicit_file_fails() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.yaml");

        let result = resolve_defaults(Some(missing.to_str().unwrap()));

        assert!(matches!(result, Err(Error::ConfigParsing { .. })));
    }
}
