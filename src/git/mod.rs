mod commands;
mod remote_url;
mod runner;

pub use commands::{Git, WorkTreeState};
pub use remote_url::{is_full_url, RemoteTemplate};
pub use runner::{GitOutput, GitRunner, SystemGit};

#[cfg(test)]
pub use runner::MockGitRunner;
