use crate::config::Config;
use crate::error::CliError;
use crate::git::{RemoteTemplate, SystemGit};
use crate::input::{InputSource, LineInput, NoInput, TerminalInput};
use crate::publish::{PublishOptions, Publisher, PushMode, PushOutcome};
use log::debug;
use std::io::{self, IsTerminal};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct PublishCommand {
    #[structopt(help = "Repository name or full SSH/HTTPS URL (prompted if omitted)")]
    repository: Option<String>,

    #[structopt(short, long, help = "Branch to push (default: main, or default_branch from config)")]
    branch: Option<String>,

    #[structopt(short, long, help = "Commit message (prompted if omitted)")]
    message: Option<String>,

    #[structopt(long, help = "Ask before pushing and do not retry a failed push")]
    confirm: bool,

    #[structopt(long = "no-switch", help = "Do not create or switch to the target branch")]
    no_switch: bool,

    #[structopt(long, help = "SSH host alias used for short repository names")]
    host: Option<String>,

    #[structopt(long, help = "Account namespace used for short repository names")]
    namespace: Option<String>,
}

impl PublishCommand {
    pub fn options(&self, config: &Config) -> PublishOptions {
        let template = RemoteTemplate::new(
            self.host.as_deref().unwrap_or(&config.host_alias),
            self.namespace.as_deref().unwrap_or(&config.namespace),
        );

        PublishOptions {
            branch: self
                .branch
                .clone()
                .unwrap_or_else(|| config.default_branch.clone()),
            switch_branch: !self.no_switch,
            repository: self.repository.clone(),
            message: self.message.clone(),
            push_mode: if self.confirm {
                PushMode::Confirm
            } else {
                PushMode::RetryWithUpstream
            },
            template,
        }
    }

    pub fn execute(&self, non_interactive: bool) -> Result<PushOutcome, CliError> {
        if non_interactive && self.confirm {
            return Err(CliError::InputError(
                "--confirm cannot be used in non-interactive mode".to_string(),
            ));
        }

        let config = Config::load()?;
        let options = self.options(&config);
        debug!("Publishing with {:?}", options);

        let stdin = io::stdin();
        if non_interactive {
            publish(&mut NoInput, options)
        } else if stdin.is_terminal() {
            publish(&mut TerminalInput, options)
        } else {
            debug!("stdin is not a terminal, reading answers line by line");
            publish(&mut LineInput::new(stdin.lock(), io::stdout()), options)
        }
    }
}

fn publish(input: &mut dyn InputSource, options: PublishOptions) -> Result<PushOutcome, CliError> {
    Publisher::new(SystemGit::new(), input, options).run()
}

pub fn show_config() -> Result<(), CliError> {
    let config = Config::load()?;
    let template = config.template();

    println!("git-helper configuration");
    println!("========================");
    match Config::config_path() {
        Some(path) if path.exists() => println!("File: {}", path.display()),
        Some(path) => println!("File: {} (not present, using defaults)", path.display()),
        None => println!("File: (no config directory available)"),
    }
    println!("Host alias: {}", template.host_alias());
    println!("Namespace: {}", template.namespace());
    println!("Default branch: {}", config.default_branch);
    println!("Short names resolve to: {}", template.resolve("<name>"));
    Ok(())
}
