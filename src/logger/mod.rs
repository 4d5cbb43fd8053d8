use colored::*;
use env_logger::{Builder, Env};
use log::{info, warn, LevelFilter};

/// Install the global logger. `-v` and `-q` win over `RUST_LOG`.
pub fn init(verbose: bool, quiet: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(LevelFilter::Error);
    }
    builder.format_timestamp(None).format_target(false).init();
}

/// A pipeline step finished.
pub fn done(msg: &str) {
    info!("{} {}", "✓".green(), msg);
}

/// A pipeline step is about to call git.
pub fn step(msg: &str) {
    info!("{} {}", "→".blue(), msg);
}

pub fn note(msg: &str) {
    info!("{} {}", "ℹ".blue(), msg);
}

/// A step failed but the run carries on: branch checks and the first push.
pub fn setback(msg: &str) {
    warn!("{} {}", "⚠".yellow(), msg);
}
