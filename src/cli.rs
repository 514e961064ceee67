use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::config::Settings;
use crate::constants::{
    CONFIG_HELP, DIRECTORY_HELP, DRY_RUN_HELP, INTERACTIVE_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, NO_RECURSE_HELP, RENAME_DIRS_HELP, REPLACE_HELP, SEARCH_HELP,
    VERBOSE_HELP,
};
use crate::errors::Result;
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Builds the command-line interface definition
///
/// Defines the following arguments:
/// - `directory`: Directory whose entries are renamed
/// - `search` / `replace`: The tokens
/// - `no_recurse` / `rename_dirs`: Traversal switches
/// - `interactive`: Ask for every setting
/// - `dry`: Run without renaming anything
/// - `config`: Path to a defaults file
/// - `verbose`, `log_file`, `log_locally`: Logging
pub fn build_command() -> Command {
    let arg_directory = Arg::new("directory").help(DIRECTORY_HELP).index(1);

    let arg_search = Arg::new("search")
        .short('s')
        .long("search")
        .help(SEARCH_HELP)
        .allow_hyphen_values(true);

    let arg_replace = Arg::new("replace")
        .short('r')
        .long("replace")
        .help(REPLACE_HELP)
        .allow_hyphen_values(true);

    let arg_no_recurse = Arg::new("no_recurse")
        .long("no-recurse")
        .help(NO_RECURSE_HELP)
        .action(ArgAction::SetTrue);

    let arg_rename_dirs = Arg::new("rename_dirs")
        .short('d')
        .long("rename-dirs")
        .help(RENAME_DIRS_HELP)
        .action(ArgAction::SetTrue);

    let arg_interactive = Arg::new("interactive")
        .short('i')
        .long("interactive")
        .help(INTERACTIVE_HELP)
        .action(ArgAction::SetTrue);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for reading defaults from a specific file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    let arg_log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .arg(arg_directory)
        .arg(arg_search)
        .arg(arg_replace)
        .arg(arg_no_recurse)
        .arg(arg_rename_dirs)
        .arg(arg_interactive)
        .arg(arg_dry)
        .arg(arg_config)
        .arg(arg_log_file)
        .arg(arg_log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments, exiting with usage information on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the path of the log file, or `None` when file logging is disabled
///
/// Without `--log-locally` the file is placed in the configuration directory.
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined or created
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() {
        return Ok(None);
    }

    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}

/// Gets the defaults file given with --config
pub fn get_config_file(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("config").map(String::as_str)
}

pub fn is_interactive(matches: &ArgMatches) -> bool {
    matches.get_flag("interactive")
}

pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

/// Applies the values given on the command line on top of `settings`
///
/// Flags can only switch a behaviour away from its built-in default, so a
/// defaults file that disables recursion is not overridden by an absent flag.
pub fn apply_matches(mut settings: Settings, matches: &ArgMatches) -> Settings {
    if let Some(directory) = matches.get_one::<String>("directory") {
        settings.directory = directory.clone();
    }
    if let Some(search) = matches.get_one::<String>("search") {
        settings.search = search.clone();
    }
    if let Some(replace) = matches.get_one::<String>("replace") {
        settings.replace = replace.clone();
    }
    if matches.get_flag("no_recurse") {
        settings.recurse_subdirectories = false;
    }
    if matches.get_flag("rename_dirs") {
        settings.rename_directories = true;
    }
    settings
}
