use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Output};
use std::sync::Once;
use tempfile::TempDir;

#[allow(dead_code)]
static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_test_env() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
            .is_test(true)
            .init();
    });
}

/// An isolated place to run git-helper: a work directory, a directory of
/// bare "remote" repositories, a private global git config and a private
/// git-helper config dir.
///
/// The global git config rewrites the default template host
/// (`git@github-personal:fady17/`) to the local remotes directory, so short
/// repository names push to `remotes/<name>.git` without any network.
#[allow(dead_code)]
pub struct Sandbox {
    pub root: TempDir,
    pub work: PathBuf,
    pub remotes: PathBuf,
    pub config_dir: PathBuf,
    gitconfig: PathBuf,
}

#[allow(dead_code)]
impl Sandbox {
    pub fn new() -> Self {
        setup_test_env();

        let root = TempDir::new().expect("Failed to create temp directory");
        let work = root.path().join("work");
        let remotes = root.path().join("remotes");
        let config_dir = root.path().join("config");
        for dir in [&work, &remotes, &config_dir] {
            std::fs::create_dir_all(dir).expect("Failed to create sandbox directory");
        }

        let gitconfig = root.path().join("gitconfig");
        let gitconfig_content = format!(
            "[user]\n\tname = Test User\n\temail = test@example.com\n\
             [init]\n\tdefaultBranch = trunk\n\
             [commit]\n\tgpgsign = false\n\
             [url \"{}/\"]\n\tinsteadOf = git@github-personal:fady17/\n",
            remotes.display()
        );
        std::fs::write(&gitconfig, gitconfig_content).expect("Failed to write git config");

        Self {
            root,
            work,
            remotes,
            config_dir,
            gitconfig,
        }
    }

    fn envs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("HOME", self.root.path().display().to_string()),
            ("GIT_CONFIG_GLOBAL", self.gitconfig.display().to_string()),
            ("GIT_CONFIG_NOSYSTEM", "1".to_string()),
            ("GIT_CEILING_DIRECTORIES", self.root.path().display().to_string()),
            ("GIT_TERMINAL_PROMPT", "0".to_string()),
            // Any attempt to reach a real SSH host fails immediately
            ("GIT_SSH_COMMAND", "false".to_string()),
            ("GIT_HELPER_CONFIG_DIR", self.config_dir.display().to_string()),
            ("RUST_LOG", "info".to_string()),
        ]
    }

    /// The git-helper binary, running in the work directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("git-helper").unwrap();
        cmd.current_dir(&self.work);
        for (key, value) in self.envs() {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run git with the sandbox environment.
    pub fn git(&self, dir: &Path, args: &[&str]) -> Output {
        let mut cmd = StdCommand::new("git");
        cmd.args(args).current_dir(dir);
        for (key, value) in self.envs() {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run git")
    }

    pub fn git_stdout(&self, dir: &Path, args: &[&str]) -> String {
        let output = self.git(dir, args);
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Create `remotes/<name>.git` as an empty bare repository.
    pub fn bare_remote(&self, name: &str) -> PathBuf {
        let path = self.remotes.join(format!("{}.git", name));
        let output = self.git(
            &self.remotes,
            &["init", "--bare", path.to_str().expect("utf-8 path")],
        );
        assert!(output.status.success(), "Failed to create bare remote");
        path
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).expect("Failed to write work file");
    }
}
