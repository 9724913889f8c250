//! AppScale CLI — AppScalefile-driven front end for the AppScale tools.

use appscale::cli::{self, Cli, DirectiveContext};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> appscale::core::error::Result<()> {
    let workdir = cli.resolve_workdir()?;
    let launcher = cli.launcher();
    let ctx = DirectiveContext {
        workdir: &workdir,
        launcher: launcher.as_ref(),
    };
    cli::dispatch(cli.command, &ctx)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        if e.is_usage() {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
