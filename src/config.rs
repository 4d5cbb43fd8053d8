use crate::error::CliError;
use crate::git::RemoteTemplate;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const REMOTE_NAME: &str = "origin";

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_HOST_ALIAS: &str = "github-personal";
pub const DEFAULT_NAMESPACE: &str = "fady17";

/// Prefixes that mark an argument as an already complete remote locator.
pub const SSH_PREFIX: &str = "git@";
pub const HTTPS_PREFIX: &str = "https://";

pub const CONFIG_DIR_ENV: &str = "GIT_HELPER_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host_alias: String,
    pub namespace: String,
    pub default_branch: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_alias: DEFAULT_HOST_ALIAS.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl Config {
    /// `$GIT_HELPER_CONFIG_DIR` when set, otherwise the platform config dir.
    pub fn config_dir() -> Option<PathBuf> {
        match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => dirs::config_dir().map(|dir| dir.join("git-helper")),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Load the user configuration. A missing file yields the defaults.
    pub fn load() -> Result<Self, CliError> {
        let path = match Self::config_path() {
            Some(path) if path.exists() => path,
            _ => {
                log::debug!("No configuration file found, using defaults");
                return Ok(Self::default());
            }
        };

        log::debug!("Loading configuration from {path:?}");
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        let fields = [
            ("host_alias", &self.host_alias),
            ("namespace", &self.namespace),
            ("default_branch", &self.default_branch),
        ];
        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(CliError::ConfigError(format!("'{}' must not be empty", key)));
            }
        }
        Ok(())
    }

    pub fn template(&self) -> RemoteTemplate {
        RemoteTemplate::new(&self.host_alias, &self.namespace)
    }
}
