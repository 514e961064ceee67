/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "file_rename";

/// Directory renamed when none is given
pub const DEFAULT_DIRECTORY: &str = ".";

/// Search token used when none is given
///
/// A single space is special: it matches any run of whitespace.
pub const DEFAULT_SEARCH: &str = " ";

/// Replacement token used when none is given
pub const DEFAULT_REPLACE: &str = "_";

/// Name of the defaults file looked up in the configuration directory
pub const DEFAULTS_FILE: &str = "defaults.yaml";

/// Default name of the log file, empty disables file logging
pub const LOG_FILE_DEFAULT: &str = "file_rename.log";

/// Help text for the directory argument
pub const DIRECTORY_HELP: &str = "Directory whose entries are renamed (default: current directory)";

/// Help text for the search option
pub const SEARCH_HELP: &str =
    "Character(s) to replace in names; a single space matches any run of whitespace";

/// Help text for the replace option
pub const REPLACE_HELP: &str = "Character(s) used as the replacement (default: underscore)";

/// Help text for the no-recurse flag
pub const NO_RECURSE_HELP: &str = "Do not rename entries inside subdirectories";

/// Help text for the rename-dirs flag
pub const RENAME_DIRS_HELP: &str = "Rename directories as well as files";

/// Help text for the interactive flag
pub const INTERACTIVE_HELP: &str = "Ask for every setting interactively";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read defaults from a specific YAML file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without renaming any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Name of the log file (empty to disable file logging)";

/// Help text for the local logging flag
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file to the current directory instead of the configuration directory";
