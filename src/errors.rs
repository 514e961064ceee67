use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the File Rename application
#[derive(Debug)]
pub enum Error {
    /// A directory could not be entered or listed
    DirectoryAccess { source: io::Error, path: PathBuf },
    /// A single entry could not be renamed
    Rename {
        from: PathBuf,
        to: PathBuf,
        reason: RenameFailure,
    },
    /// The search token is empty
    EmptySearch,
    /// The given path is not an existing directory
    InvalidDirectory { path: PathBuf },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// The operator ended the interactive session
    Interrupted,
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

/// Why a rename was refused or failed
#[derive(Debug)]
pub enum RenameFailure {
    /// The operating system rejected the rename
    Io(io::Error),
    /// Another entry already occupies the new name
    TargetExists,
    /// The new name is empty or contains a path separator
    InvalidTargetName,
}

impl fmt::Display for RenameFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameFailure::Io(err) => write!(f, "{err}"),
            RenameFailure::TargetExists => write!(f, "target already exists"),
            RenameFailure::InvalidTargetName => {
                write!(f, "new name is empty or contains a path separator")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryAccess { path, .. } => {
                write!(f, "Access to directory \"{}\" denied", path.display())
            }
            Error::Rename { from, to, reason } => {
                write!(
                    f,
                    "Failed to rename {} to {}: {}",
                    from.display(),
                    to.display(),
                    reason
                )
            }
            Error::EmptySearch => write!(f, "Search token must not be empty"),
            Error::InvalidDirectory { path } => {
                write!(f, "Not a valid directory: {}", path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::Interrupted => write!(f, "Interrupted by user"),
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::DirectoryAccess { source, .. } => Some(source),
            Error::Rename {
                reason: RenameFailure::Io(source),
                ..
            } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Custom Result type for the File Rename application
///
/// # Examples
/// ```
/// use file_rename::errors::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a directory access error
pub fn directory_access_error(err: io::Error, path: PathBuf) -> Error {
    Error::DirectoryAccess { source: err, path }
}

/// Helper function to create a rename error
pub fn rename_error(from: PathBuf, to: PathBuf, reason: RenameFailure) -> Error {
    Error::Rename { from, to, reason }
}

/// Helper function to create an invalid directory error
pub fn invalid_directory_error(path: PathBuf) -> Error {
    Error::InvalidDirectory { path }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
