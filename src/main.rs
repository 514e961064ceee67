use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use log::warn;

use file_rename::cli::{
    apply_matches, get_config_file, get_log_file, get_matches, get_verbosity, is_dry_run,
    is_interactive,
};
use file_rename::config::{PromptSession, Settings, resolve_defaults};
use file_rename::errors::Error;
use file_rename::logging::{format_message, init_logger};
use file_rename::workflow::{ProcessingOptions, process_tree};

/// Exit status used when the operator ends the interactive session
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    match run() {
        Ok(code) => code,
        Err(e) => {
            let message = format!("\n{e:#}\n");
            eprintln!("{}", format_message(&message, &message.bold().red().to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let matches = get_matches();

    let (log_file, log_file_error) = match get_log_file(&matches) {
        Ok(log_file) => (log_file, None),
        Err(e) => (None, Some(e)),
    };
    init_logger(get_verbosity(&matches), log_file.as_deref())?;
    if let Some(e) = log_file_error {
        warn!("Logging to file disabled: {e}");
    }

    let defaults = resolve_defaults(get_config_file(&matches))?;
    let mut settings = apply_matches(Settings::default().with_defaults(&defaults), &matches);

    if is_interactive(&matches) {
        settings = match PromptSession::stdio().run(settings) {
            Ok(settings) => settings,
            Err(Error::Interrupted) => {
                println!();
                return Ok(ExitCode::from(EXIT_INTERRUPTED));
            }
            Err(e) => return Err(e.into()),
        };
    }

    let request = settings.validate()?;
    let options = ProcessingOptions {
        dry_run: is_dry_run(&matches),
    };

    let context = process_tree(&request, &options);

    if options.dry_run {
        print!("{}", context.plan_report());
    }

    let banner = context.banner();
    println!(
        "\n{}\n",
        format_message(&banner, &banner.bold().green().to_string())
    );

    Ok(ExitCode::SUCCESS)
}
