//! Interactive prompt session
//!
//! Asks the operator for every setting, one question at a time, re-asking
//! until the answer is acceptable. An empty answer keeps the value shown as
//! the default.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;
use log::debug;

use crate::errors::{Error, Result, generic_error};
use crate::utils::expand_directory;

use super::model::Settings;

const YES_NO_ANSWERS: [&str; 4] = ["yes", "y", "no", "n"];

/// Prompts on one stream and reads answers from another
pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl PromptSession<StdinLock<'static>, Stdout> {
    /// Creates a session on the process's standard input and output
    pub fn stdio() -> Self {
        PromptSession::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptSession { input, output }
    }

    /// Asks for every setting, using the given settings as defaults
    ///
    /// # Errors
    /// Returns `Interrupted` when the input ends before all questions are answered
    pub fn run(&mut self, settings: Settings) -> Result<Settings> {
        let directory = self.ask_directory(&settings.directory)?;
        let search = self.ask_token(
            "Enter character(s) to replace in filenames",
            &settings.search,
        )?;
        let replace = self.ask_token(
            "Enter character(s) to be used for replacement",
            &settings.replace,
        )?;
        let recurse_subdirectories = self.ask_yes_no(
            "Do you want to rename files in sub directories too?",
            settings.recurse_subdirectories,
        )?;
        let rename_directories = self.ask_yes_no(
            "Do you want to rename directories too?",
            settings.rename_directories,
        )?;

        let answered = Settings {
            directory,
            search,
            replace,
            recurse_subdirectories,
            rename_directories,
        };
        debug!("Interactive settings: {answered:?}");
        Ok(answered)
    }

    /// Asks for an existing directory
    pub fn ask_directory(&mut self, default: &str) -> Result<String> {
        let prompt = format!("Enter directory (if left empty, default is {default:?}): ");
        let answer = self.ask(
            &prompt,
            |answer| {
                let answer = answer.trim();
                answer.is_empty() || expand_directory(answer).is_dir()
            },
            "Please enter a valid directory",
        )?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    /// Asks for a token; surrounding spaces in the answer are kept
    pub fn ask_token(&mut self, question: &str, default: &str) -> Result<String> {
        let prompt = format!("{question} (if left empty, default is {default:?}): ");
        let answer = self.read_answer(&prompt)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    /// Asks a yes/no question
    pub fn ask_yes_no(&mut self, question: &str, default: bool) -> Result<bool> {
        let choices = if default { "[Y/n]" } else { "[y/N]" };
        let prompt = format!("{question} yes(y)/no(n) {choices}: ");
        let answer = self.ask(
            &prompt,
            |answer| {
                let answer = answer.trim().to_lowercase();
                answer.is_empty() || YES_NO_ANSWERS.contains(&answer.as_str())
            },
            "Please enter either yes(y) or no(n)",
        )?;
        Ok(match answer.trim().to_lowercase().as_str() {
            "" => default,
            "yes" | "y" => true,
            _ => false,
        })
    }

    fn ask<F>(&mut self, prompt: &str, is_valid: F, error_message: &str) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let answer = self.read_answer(prompt)?;
            if is_valid(&answer) {
                return Ok(answer);
            }
            writeln!(self.output, "\n{}\n", error_message.bold().red()).map_err(write_failed)?;
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt.cyan()).map_err(write_failed)?;
        self.output.flush().map_err(write_failed)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| generic_error(&format!("Failed to read answer: {e}")))?;
        if read == 0 {
            return Err(Error::Interrupted);
        }

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

fn write_failed(err: io::Error) -> Error {
    generic_error(&format!("Failed to write prompt: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn session(input: &str) -> PromptSession<Cursor<Vec<u8>>, Vec<u8>> {
        PromptSession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_empty_answers_keep_defaults() {
        let mut prompts = session("\n\n\n\n\n");

        let settings = prompts.run(Settings::default()).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_answers_replace_defaults() {
        let temp_dir = tempdir().unwrap();
        let input = format!("{}\n-\n \nn\ny\n", temp_dir.path().display());
        let mut prompts = session(&input);

        let settings = prompts.run(Settings::default()).unwrap();

        assert_eq!(settings.directory, temp_dir.path().display().to_string());
        assert_eq!(settings.search, "-");
        assert_eq!(settings.replace, " ");
        assert!(!settings.recurse_subdirectories);
        assert!(settings.rename_directories);
    }

    #[test]
    fn test_invalid_directory_is_asked_again() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let input = format!("{}\n{}\n", missing.display(), temp_dir.path().display());
        let mut prompts = session(&input);

        let directory = prompts.ask_directory(".").unwrap();

        assert_eq!(directory, temp_dir.path().display().to_string());
        let output = String::from_utf8(prompts.output).unwrap();
        assert!(output.contains("Please enter a valid directory"));
    }

    #[test]
    fn test_yes_no_retries_until_valid() {
        let mut prompts = session("maybe\nYES\n");

        assert!(prompts.ask_yes_no("Continue?", false).unwrap());

        let output = String::from_utf8(prompts.output).unwrap();
        assert_eq!(output.matches("Please enter either yes(y) or no(n)").count(), 1);
    }

    #[test]
    fn test_yes_no_accepts_short_forms() {
        let mut prompts = session("y\nn\nNo\n");
        assert!(prompts.ask_yes_no("?", false).unwrap());
        assert!(!prompts.ask_yes_no("?", true).unwrap());
        assert!(!prompts.ask_yes_no("?", true).unwrap());
    }

    #[test]
    fn test_end_of_input_interrupts() {
        let mut prompts = session("\n");

        let result = prompts.run(Settings::default());

        assert!(matches!(result, Err(Error::Interrupted)));
    }

    #[test]
    fn test_windows_line_endings_are_stripped() {
        let mut prompts = session("abc\r\n");
        assert_eq!(prompts.ask_token("Search", " ").unwrap(), "abc");
    }
}
