//! Subprocess access to the git executable

use crate::error::CliError;
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn ok(stdout: &str) -> Self {
        Self {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: &str) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// The text to show when this invocation failed.
    pub fn error_text(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        "git exited with a non-zero status".to_string()
    }
}

/// Runs git with the given arguments and waits for it to finish.
///
/// `Err` means git could not be started at all; a git that ran and failed
/// is reported through [`GitOutput::success`].
#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    fn run(&self, args: &[String]) -> Result<GitOutput, CliError>;
}

/// Runs the real `git` binary found on `PATH`.
#[derive(Debug, Default)]
pub struct SystemGit {
    working_dir: Option<PathBuf>,
}

impl SystemGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[String]) -> Result<GitOutput, CliError> {
        debug!("Running: git {}", args.join(" "));

        let mut command = Command::new("git");
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(CliError::GitUnavailable)?;
        let result = GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        debug!(
            "git {} exited with {}",
            args.first().map(String::as_str).unwrap_or(""),
            output.status
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_error_text_prefers_stderr() {
        let output = GitOutput {
            success: false,
            stdout: "partial\n".into(),
            stderr: "fatal: not a git repository\n".into(),
        };
        assert_eq!(output.error_text(), "fatal: not a git repository");
    }

    #[test]
    fn test_error_text_falls_back_to_stdout() {
        let output = GitOutput {
            success: false,
            stdout: "nothing to commit, working tree clean\n".into(),
            stderr: "  ".into(),
        };
        assert_eq!(output.error_text(), "nothing to commit, working tree clean");
    }

    #[test]
    fn test_error_text_when_silent() {
        assert_eq!(
            GitOutput::failed("").error_text(),
            "git exited with a non-zero status"
        );
    }

    #[test]
    fn test_system_git_reports_failure_without_error() {
        let dir = TempDir::new().unwrap();
        let git = SystemGit::in_dir(dir.path());
        let output = git
            .run(&["definitely-not-a-git-command".to_string()])
            .unwrap();
        assert!(!output.success);
        assert!(!output.error_text().is_empty());
    }
}
