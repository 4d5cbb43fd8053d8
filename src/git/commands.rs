use super::runner::{GitOutput, GitRunner};
use crate::error::CliError;
use log::debug;

/// What `git rev-parse --is-inside-work-tree` says about the current directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkTreeState {
    /// Inside a checked-out work tree.
    WorkTree,
    /// rev-parse failed: no repository here or above.
    NotARepository,
    /// A repository without a work tree, e.g. a bare one or inside `.git`.
    NoWorkTree,
}

/// The git operations the publish pipeline needs, on top of a [`GitRunner`].
pub struct Git<R: GitRunner> {
    runner: R,
}

impl<R: GitRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn run(&self, args: &[&str]) -> Result<GitOutput, CliError> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        self.runner.run(&args)
    }

    /// Run and turn a non-zero exit into the error built by `kind`.
    fn run_checked(
        &self,
        args: &[&str],
        kind: fn(String) -> CliError,
    ) -> Result<GitOutput, CliError> {
        let output = self.run(args)?;
        if output.success {
            Ok(output)
        } else {
            Err(kind(output.error_text()))
        }
    }

    pub fn work_tree_state(&self) -> Result<WorkTreeState, CliError> {
        let output = self.run(&["rev-parse", "--is-inside-work-tree"])?;
        if !output.success {
            return Ok(WorkTreeState::NotARepository);
        }
        if output.stdout.trim() == "true" {
            Ok(WorkTreeState::WorkTree)
        } else {
            Ok(WorkTreeState::NoWorkTree)
        }
    }

    pub fn init(&self) -> Result<(), CliError> {
        self.run_checked(&["init"], CliError::InitFailed)?;
        Ok(())
    }

    pub fn current_branch(&self) -> Result<String, CliError> {
        let output = self.run_checked(&["branch", "--show-current"], CliError::BranchFailed)?;
        Ok(output.stdout.trim().to_string())
    }

    /// Create `branch` or reset it to HEAD, then switch to it.
    pub fn checkout_branch(&self, branch: &str) -> Result<(), CliError> {
        self.run_checked(&["checkout", "-B", branch], CliError::BranchFailed)?;
        Ok(())
    }

    /// Force-rename the current branch.
    pub fn rename_branch(&self, branch: &str) -> Result<(), CliError> {
        self.run_checked(&["branch", "-M", branch], CliError::BranchFailed)?;
        Ok(())
    }

    pub fn remote_add(&self, name: &str, url: &str) -> Result<(), CliError> {
        self.run_checked(&["remote", "add", name, url], CliError::RemoteFailed)?;
        Ok(())
    }

    pub fn remote_set_url(&self, name: &str, url: &str) -> Result<(), CliError> {
        self.run_checked(&["remote", "set-url", name, url], CliError::RemoteFailed)?;
        Ok(())
    }

    /// The URL stored for `name`, before any `insteadOf` rewriting.
    pub fn remote_url(&self, name: &str) -> Result<String, CliError> {
        let key = format!("remote.{}.url", name);
        let output = self.run_checked(&["config", "--get", &key], CliError::RemoteFailed)?;
        Ok(output.stdout.trim().to_string())
    }

    /// `git remote -v`, one entry per line.
    pub fn list_remotes(&self) -> Result<Vec<String>, CliError> {
        let output = self.run_checked(&["remote", "-v"], CliError::RemoteFailed)?;
        Ok(output
            .stdout
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }

    pub fn add_all(&self) -> Result<(), CliError> {
        self.run_checked(&["add", "."], CliError::StageFailed)?;
        Ok(())
    }

    pub fn commit(&self, message: &str) -> Result<(), CliError> {
        let output = self.run_checked(&["commit", "-m", message], CliError::CommitFailed)?;
        debug!("{}", output.stdout.trim());
        Ok(())
    }

    /// Push `branch` to `remote` and record it as upstream.
    pub fn push_upstream(&self, remote: &str, branch: &str) -> Result<(), CliError> {
        self.run_checked(&["push", "-u", remote, branch], CliError::PushFailed)?;
        Ok(())
    }
}
