//! AS-006: Error kinds surfaced by every directive.
//!
//! Every variant is terminal for the directive that raised it. The Display
//! text is what the operator sees, so each message carries the remediation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from locating, reading, translating, or dispatching a directive.
#[derive(Debug, Error)]
pub enum AppscaleError {
    /// No AppScalefile where one was required.
    #[error(
        "No AppScalefile found in {}. Please run 'appscale init' to generate one and try again.",
        .dir.display()
    )]
    ConfigMissing { dir: PathBuf },

    /// `init` was called with an AppScalefile already present.
    #[error(
        "There is already an AppScalefile at {}. Please remove it and run 'appscale init' again to generate a new AppScalefile.",
        .path.display()
    )]
    ConfigAlreadyExists { path: PathBuf },

    /// Unrecognized environment profile passed to `init`.
    #[error("The environment you specified ('{0}') was invalid. Valid environments are 'cloud' and 'cluster'.")]
    InvalidProfile(String),

    /// AppScalefile content does not decode into a mapping of options.
    #[error("AppScalefile is malformed: {0}. Fix it or remove it and run 'appscale init' again.")]
    MalformedConfig(String),

    /// Unknown directive or an explicit `help` request. Carries the usage text.
    #[error("{0}")]
    Usage(&'static str),

    /// The downstream executable could not be launched.
    #[error("cannot launch '{program}': {source}. Make sure the AppScale tools are installed and on your PATH.")]
    DispatchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem failure outside the open check (template write, read after open).
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppscaleError {
    /// True for the usage/help outcome, which the binary renders without an error prefix.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppscaleError>;
