use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not run git: {0}")]
    GitUnavailable(std::io::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error initializing Git repository: {0}")]
    InitFailed(String),

    #[error("No work tree to publish: {0}")]
    NoWorkTree(String),

    #[error("Branch error: {0}")]
    BranchFailed(String),

    #[error("Error setting Git remote URL: {0}")]
    RemoteFailed(String),

    #[error("Error adding changes: {0}")]
    StageFailed(String),

    #[error("Error committing changes: {0}")]
    CommitFailed(String),

    #[error("Error pushing changes: {0}")]
    PushFailed(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CliError {
    /// Process exit status for this failure. Usage and config problems get 2,
    /// anything git reported gets 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputError(_) | CliError::ConfigError(_) => 2,
            _ => 1,
        }
    }
}

impl From<inquire::InquireError> for CliError {
    fn from(error: inquire::InquireError) -> Self {
        CliError::InputError(error.to_string())
    }
}
