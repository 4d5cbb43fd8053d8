use super::validation::{parse_confirmation, validate_commit_message, validate_repository};
use crate::error::CliError;
use inquire::validator::Validation;
use inquire::{Confirm, Text};
use std::io::{BufRead, Write};

const REPOSITORY_PROMPT: &str = "Enter the repository name or full URL:";
const COMMIT_MESSAGE_PROMPT: &str = "Enter commit message:";

fn push_question(remote: &str, branch: &str) -> String {
    format!("Push changes to {}/{}?", remote, branch)
}

/// Where the publish pipeline gets the values it asks the user for.
pub trait InputSource {
    fn repository(&mut self) -> Result<String, CliError>;
    fn commit_message(&mut self) -> Result<String, CliError>;
    fn confirm_push(&mut self, remote: &str, branch: &str) -> Result<bool, CliError>;
}

/// Prompts on an interactive terminal.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn repository(&mut self) -> Result<String, CliError> {
        let repository = Text::new(REPOSITORY_PROMPT)
            .with_validator(|s: &str| match validate_repository(s) {
                Ok(()) => Ok(Validation::Valid),
                Err(msg) => Ok(Validation::Invalid(msg.into())),
            })
            .prompt()?;
        Ok(repository.trim().to_string())
    }

    fn commit_message(&mut self) -> Result<String, CliError> {
        let message = Text::new(COMMIT_MESSAGE_PROMPT)
            .with_validator(|s: &str| match validate_commit_message(s) {
                Ok(()) => Ok(Validation::Valid),
                Err(msg) => Ok(Validation::Invalid(msg.into())),
            })
            .prompt()?;
        Ok(message.trim().to_string())
    }

    fn confirm_push(&mut self, remote: &str, branch: &str) -> Result<bool, CliError> {
        Ok(Confirm::new(&push_question(remote, branch))
            .with_default(false)
            .prompt()?)
    }
}

/// Reads one line per answer, for piped or scripted input.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.writer, "{} ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::InputError(format!(
                "No input available for '{}'",
                prompt.trim_end_matches(':')
            )));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn repository(&mut self) -> Result<String, CliError> {
        let repository = self.ask(REPOSITORY_PROMPT)?;
        validate_repository(&repository).map_err(CliError::InputError)?;
        Ok(repository)
    }

    fn commit_message(&mut self) -> Result<String, CliError> {
        let message = self.ask(COMMIT_MESSAGE_PROMPT)?;
        validate_commit_message(&message).map_err(CliError::InputError)?;
        Ok(message)
    }

    fn confirm_push(&mut self, remote: &str, branch: &str) -> Result<bool, CliError> {
        let answer = self.ask(&format!("{} [y/N]:", push_question(remote, branch)))?;
        Ok(parse_confirmation(&answer))
    }
}

/// Used with `--non-interactive`: every question is an error.
pub struct NoInput;

impl InputSource for NoInput {
    fn repository(&mut self) -> Result<String, CliError> {
        Err(CliError::InputError(
            "A repository name or URL is required in non-interactive mode".to_string(),
        ))
    }

    fn commit_message(&mut self) -> Result<String, CliError> {
        Err(CliError::InputError(
            "--message is required in non-interactive mode".to_string(),
        ))
    }

    fn confirm_push(&mut self, _remote: &str, _branch: &str) -> Result<bool, CliError> {
        Err(CliError::InputError(
            "--confirm cannot be used in non-interactive mode".to_string(),
        ))
    }
}
