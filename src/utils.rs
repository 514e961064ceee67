use std::fs::create_dir_all;
use std::path::PathBuf;

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, DEFAULT_DIRECTORY, DEFAULTS_FILE, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error};

/// Turns a directory typed by the operator into a path
///
/// A leading `~` is expanded and an empty input means the current directory.
pub fn expand_directory(directory: &str) -> PathBuf {
    let directory = directory.trim();
    if directory.is_empty() {
        return PathBuf::from(DEFAULT_DIRECTORY);
    }
    PathBuf::from(tilde(directory).into_owned())
}

/// Finds the configuration directory, creating it when missing
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            generic_error(&format!(
                "Failed to create configuration directory {}: {e}",
                folder.config_dir().display()
            ))
        })?;
    }
    Ok(folder)
}

/// Location of the defaults file in the configuration directory, without creating anything
pub(crate) fn default_defaults_file() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|folder| folder.config_dir().join(DEFAULTS_FILE))
}
