//! AS-005: Dry-run launcher — print the invocation instead of running it.

use super::Launcher;
use crate::core::error::Result;
use crate::core::types::Invocation;

/// Prints what would be launched. `json` selects machine-readable output.
#[derive(Debug, Clone, Default)]
pub struct DryRunLauncher {
    pub prefix: String,
    pub json: bool,
}

impl DryRunLauncher {
    /// Rendered line for `invocation`, as printed by `launch`.
    pub fn render(&self, invocation: &Invocation) -> String {
        let resolved = Invocation {
            program: format!("{}{}", self.prefix, invocation.program),
            args: invocation.args.clone(),
        };
        if self.json {
            // Plain strings only; serialization cannot fail.
            serde_json::to_string(&resolved).unwrap_or_default()
        } else {
            resolved.to_string()
        }
    }
}

impl Launcher for DryRunLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<()> {
        println!("{}", self.render(invocation));
        Ok(())
    }
}
