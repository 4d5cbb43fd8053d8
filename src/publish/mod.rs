//! The publish pipeline: init, branch, remote, stage, commit, push.
//!
//! Every step is a blocking git call. A failing step stops the run and
//! leaves whatever earlier steps did in place; the only exception is the
//! push, which may be retried once after renaming the branch.

use crate::config::REMOTE_NAME;
use crate::error::CliError;
use crate::git::{Git, GitRunner, RemoteTemplate, WorkTreeState};
use crate::input::validation::{validate_commit_message, validate_repository};
use crate::input::InputSource;
use crate::logger;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushMode {
    /// On failure, force-rename the branch and push once more.
    RetryWithUpstream,
    /// Ask before pushing; a failed push is not retried.
    Confirm,
}

#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub branch: String,
    pub switch_branch: bool,
    pub repository: Option<String>,
    pub message: Option<String>,
    pub push_mode: PushMode,
    pub template: RemoteTemplate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    PushedAfterRetry,
    /// The user declined the push confirmation.
    Skipped,
}

pub struct Publisher<'a, R: GitRunner> {
    git: Git<R>,
    input: &'a mut dyn InputSource,
    options: PublishOptions,
}

impl<'a, R: GitRunner> Publisher<'a, R> {
    pub fn new(runner: R, input: &'a mut dyn InputSource, options: PublishOptions) -> Self {
        Self {
            git: Git::new(runner),
            input,
            options,
        }
    }

    pub fn run(&mut self) -> Result<PushOutcome, CliError> {
        self.bootstrap()?;
        if self.options.switch_branch {
            self.ensure_branch();
        }
        let url = self.resolve_remote()?;
        self.configure_remote(&url)?;
        self.stage()?;
        self.commit()?;
        self.push()
    }

    /// Initialize a repository unless we are already inside one.
    /// Returns whether `git init` ran.
    ///
    /// Only a failing rev-parse leads to `git init`. A repository without a work
    /// tree (bare, or the `.git` directory itself) is an error.
    pub fn bootstrap(&self) -> Result<bool, CliError> {
        match self.git.work_tree_state()? {
            WorkTreeState::WorkTree => {
                debug!("Already inside a git work tree");
                return Ok(false);
            }
            WorkTreeState::NoWorkTree => {
                return Err(CliError::NoWorkTree(
                    "this directory is a bare repository or inside a .git directory".to_string(),
                ));
            }
            WorkTreeState::NotARepository => {}
        }

        logger::note("This directory is not a Git repository. Initializing a new Git repository...");
        self.git.init()?;
        logger::done("Git repository initialized.");
        Ok(true)
    }

    /// Switch to the target branch if it is not already checked out.
    /// Failures here are reported and the run carries on.
    pub fn ensure_branch(&self) {
        let branch = &self.options.branch;
        let current = match self.git.current_branch() {
            Ok(current) => current,
            Err(e) => {
                logger::setback(&format!("Error checking the current branch: {}", e));
                return;
            }
        };

        if current == *branch {
            debug!("Already on branch '{}'", branch);
            return;
        }

        logger::step(&format!("Switching to branch '{}'...", branch));
        if let Err(e) = self.git.checkout_branch(branch) {
            logger::setback(&format!("Error creating or switching to branch: {}", e));
        }
    }

    /// The remote URL for the repository argument, asking for it if needed.
    pub fn resolve_remote(&mut self) -> Result<String, CliError> {
        let repository = match &self.options.repository {
            Some(repository) => repository.clone(),
            None => self.input.repository()?,
        };
        validate_repository(&repository).map_err(CliError::InputError)?;

        let url = self.options.template.resolve(&repository);
        debug!("Resolved '{}' to {}", repository, url);
        Ok(url)
    }

    /// Point `origin` at `url`, adding it or updating an existing one.
    pub fn configure_remote(&self, url: &str) -> Result<(), CliError> {
        if let Err(e) = self.git.remote_add(REMOTE_NAME, url) {
            debug!("git remote add failed: {}", e);
            logger::note(&format!(
                "Remote '{}' already exists. Attempting to update...",
                REMOTE_NAME
            ));
            self.git.remote_set_url(REMOTE_NAME, url)?;
        }

        let effective = self.git.remote_url(REMOTE_NAME)?;
        if effective != url {
            return Err(CliError::RemoteFailed(format!(
                "'{}' points to {} instead of {}",
                REMOTE_NAME, effective, url
            )));
        }
        logger::done(&format!("Git remote set to {}.", url));

        if let Ok(remotes) = self.git.list_remotes() {
            for remote in remotes {
                debug!("  {}", remote);
            }
        }
        Ok(())
    }

    pub fn stage(&self) -> Result<(), CliError> {
        logger::step("Adding all changes...");
        self.git.add_all()
    }

    pub fn commit(&mut self) -> Result<(), CliError> {
        let message = match &self.options.message {
            Some(message) => message.clone(),
            None => self.input.commit_message()?,
        };
        validate_commit_message(&message).map_err(CliError::InputError)?;

        self.git.commit(&message)?;
        logger::done("Changes committed.");
        Ok(())
    }

    pub fn push(&mut self) -> Result<PushOutcome, CliError> {
        let branch = self.options.branch.clone();

        if self.options.push_mode == PushMode::Confirm
            && !self.input.confirm_push(REMOTE_NAME, &branch)?
        {
            logger::note("Push skipped.");
            return Ok(PushOutcome::Skipped);
        }

        logger::step(&format!("Pushing changes to branch '{}'...", branch));
        let outcome = match self.git.push_upstream(REMOTE_NAME, &branch) {
            Ok(()) => PushOutcome::Pushed,
            Err(e) if self.options.push_mode == PushMode::RetryWithUpstream => {
                logger::setback(&format!(
                    "{} Attempting to set upstream and retry...",
                    e
                ));
                self.retry_push(&branch)?;
                PushOutcome::PushedAfterRetry
            }
            Err(e) => return Err(e),
        };

        logger::done("Changes pushed successfully!");
        Ok(outcome)
    }

    fn retry_push(&self, branch: &str) -> Result<(), CliError> {
        self.git.rename_branch(branch)?;
        self.git.push_upstream(REMOTE_NAME, branch)
    }
}
