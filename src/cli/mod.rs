//! AS-007: CLI directives — init, up, status, deploy, destroy, help.
//!
//! Each directive is an independent read → parse → build → dispatch pass
//! over the AppScalefile in the working directory. `init` only writes the
//! template.

use crate::core::error::{AppscaleError, Result};
use crate::core::{invocation, parser, store, types};
use crate::transport::{self, DryRunLauncher, Launcher, ProcessLauncher, local};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Usage shown for `help` and for any unknown or incomplete directive.
pub const USAGE: &str = "
Usage: appscale command [<args>]

Available commands:
  init: Writes a new configuration file for starting AppScale.
  up: Starts a new AppScale instance.
  status: Reports on the state of a currently running AppScale deployment.
  deploy: Deploys a Google App Engine app to AppScale.
  destroy: Terminates the currently running AppScale deployment.
  help: Displays this message.
";

#[derive(Parser, Debug)]
#[command(
    name = "appscale",
    version,
    about = "AppScalefile-driven front end for the AppScale deployment tools",
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the AppScalefile (default: current)
    #[arg(short = 'C', long, global = true, env = "APPSCALE_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Prefix prepended to the downstream tool names
    #[arg(long, global = true, env = "APPSCALE_TOOLS_PREFIX", default_value = local::DEFAULT_TOOLS_PREFIX)]
    pub tools_prefix: String,

    /// Print the tool invocation instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// With --dry-run, print the invocation as JSON
    #[arg(long, global = true, requires = "dry_run")]
    pub json: bool,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a new AppScalefile for the cloud or cluster profile
    Init {
        /// Environment profile: cloud or cluster
        profile: Option<String>,
    },

    /// Starts a new AppScale deployment
    Up,

    /// Reports on the state of the running deployment
    Status,

    /// Deploys an App Engine application
    Deploy {
        /// Path to the application directory or archive
        app: Option<String>,
    },

    /// Terminates the running deployment
    Destroy,

    /// Displays usage
    Help,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Everything a directive needs from its surroundings.
pub struct DirectiveContext<'a> {
    pub workdir: &'a Path,
    pub launcher: &'a dyn Launcher,
}

impl Cli {
    /// The working directory the directives operate on.
    pub fn resolve_workdir(&self) -> Result<PathBuf> {
        match &self.workdir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|source| AppscaleError::Io {
                path: PathBuf::from("."),
                source,
            }),
        }
    }

    /// Launcher selected by `--dry-run` / `--json` / `--tools-prefix`.
    pub fn launcher(&self) -> Box<dyn Launcher> {
        if self.dry_run {
            Box::new(DryRunLauncher {
                prefix: self.tools_prefix.clone(),
                json: self.json,
            })
        } else {
            Box::new(ProcessLauncher::new(self.tools_prefix.clone()))
        }
    }
}

/// Route a directive to its flow. A missing directive is a usage error.
pub fn dispatch(cmd: Option<Commands>, ctx: &DirectiveContext) -> Result<()> {
    match cmd {
        Some(Commands::Init {
            profile: Some(profile),
        }) => cmd_init(ctx.workdir, &profile),
        Some(Commands::Up) => cmd_up(ctx),
        Some(Commands::Status) => cmd_status(ctx),
        Some(Commands::Deploy { app: Some(app) }) => cmd_deploy(ctx, &app),
        Some(Commands::Destroy) => cmd_destroy(ctx),
        Some(Commands::Unknown(argv)) => {
            tracing::debug!(?argv, "unknown directive");
            Err(AppscaleError::Usage(USAGE))
        }
        Some(Commands::Init { profile: None })
        | Some(Commands::Deploy { app: None })
        | Some(Commands::Help)
        | None => Err(AppscaleError::Usage(USAGE)),
    }
}

fn cmd_init(workdir: &Path, profile: &str) -> Result<()> {
    let path = store::write_template(workdir, profile)?;
    println!("Created AppScalefile for the {} profile at {}", profile, path.display());
    println!("Edit it to match your deployment, then run 'appscale up'.");
    Ok(())
}

/// Read and decode the AppScalefile; shared by every non-init directive.
fn load_config(workdir: &Path) -> Result<types::ParsedConfig> {
    tracing::debug!(path = %store::location(workdir).display(), "loading AppScalefile");
    let contents = store::read(workdir)?;
    parser::parse_config(&contents)
}

fn cmd_up(ctx: &DirectiveContext) -> Result<()> {
    let config = load_config(ctx.workdir)?;
    transport::execute(ctx.launcher, &invocation::up(&config))
}

fn cmd_status(ctx: &DirectiveContext) -> Result<()> {
    let config = load_config(ctx.workdir)?;
    transport::execute(ctx.launcher, &invocation::status(&config))
}

fn cmd_deploy(ctx: &DirectiveContext, app: &str) -> Result<()> {
    let config = load_config(ctx.workdir)?;
    transport::execute(ctx.launcher, &invocation::deploy(&config, app))
}

fn cmd_destroy(ctx: &DirectiveContext) -> Result<()> {
    let config = load_config(ctx.workdir)?;
    transport::execute(ctx.launcher, &invocation::destroy(&config))
}
