include!(concat!(env!("OUT_DIR"), "/sentry_dsn.rs"));

use colored::*;
use git_helper::cli::{self, PublishCommand};
use git_helper::logger;
use sentry::ClientInitGuard;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = env!("CARGO_PKG_NAME"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
struct Opt {
    #[structopt(flatten)]
    publish: PublishCommand,

    #[structopt(long = "non-interactive", help = "Never prompt; fail if a value is missing")]
    non_interactive: bool,

    #[structopt(long = "show-config", help = "Print the effective configuration and exit")]
    show_config: bool,

    #[structopt(short, long, help = "Show debug output, including every git command")]
    verbose: bool,

    #[structopt(short, long, conflicts_with = "verbose", help = "Only show errors")]
    quiet: bool,
}

fn main() {
    let opt = Opt::from_args();
    logger::init(opt.verbose, opt.quiet);

    let guard: Option<ClientInitGuard> = (SENTRY_DSN != "undefined").then(|| {
        sentry::init((
            SENTRY_DSN,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let result = if opt.show_config {
        cli::show_config()
    } else {
        opt.publish.execute(opt.non_interactive).map(|_| ())
    };

    if let Err(e) = result {
        // Printed directly so the error survives RUST_LOG=off and --quiet
        eprintln!("{} {}", "Error:".red(), e);
        // exit() skips destructors, flush pending reports first
        drop(guard);
        std::process::exit(e.exit_code());
    }
}
