//! AS-005: Local process launcher.
//!
//! Spawns the tool directly with an argument vector (no shell), inheriting
//! stdio so the operator sees the tool's own output.

use super::Launcher;
use crate::core::error::{AppscaleError, Result};
use crate::core::types::Invocation;
use std::process::Command;

/// Default prefix of the installed AppScale tools.
pub const DEFAULT_TOOLS_PREFIX: &str = "appscale-";

/// Launches invocations as child processes and waits for them.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    prefix: String,
}

impl ProcessLauncher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Executable name actually spawned for `invocation`.
    pub fn program_for(&self, invocation: &Invocation) -> String {
        format!("{}{}", self.prefix, invocation.program)
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_TOOLS_PREFIX)
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<()> {
        let program = self.program_for(invocation);
        let status = Command::new(&program)
            .args(&invocation.args)
            .status()
            .map_err(|source| AppscaleError::DispatchFailure {
                program: program.clone(),
                source,
            })?;

        // Exit status is the tool's business; record it for -v only.
        tracing::debug!(%program, code = ?status.code(), "tool exited");
        Ok(())
    }
}
