//! AS-005: Transport — hand a built invocation to the host.
//!
//! The only seam between translation and the outside world. Launchers run
//! an argument vector to completion and report whether it could be started;
//! output and exit status belong to the downstream tool.

pub mod dry_run;
pub mod local;

use crate::core::error::Result;
use crate::core::types::Invocation;

pub use dry_run::DryRunLauncher;
pub use local::ProcessLauncher;

/// Run one invocation to completion.
pub trait Launcher {
    fn launch(&self, invocation: &Invocation) -> Result<()>;
}

/// Dispatch a built invocation through `launcher`. No retry.
pub fn execute(launcher: &dyn Launcher, invocation: &Invocation) -> Result<()> {
    tracing::debug!(argv = ?invocation.argv(), "dispatching");
    launcher.launch(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppscaleError;
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<Vec<String>>>);

    impl Launcher for Recorder {
        fn launch(&self, invocation: &Invocation) -> Result<()> {
            self.0.borrow_mut().push(invocation.argv());
            Ok(())
        }
    }

    struct Unlaunchable;

    impl Launcher for Unlaunchable {
        fn launch(&self, invocation: &Invocation) -> Result<()> {
            Err(AppscaleError::DispatchFailure {
                program: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
        }
    }

    #[test]
    fn test_as005_execute_launches_once() {
        let rec = Recorder(RefCell::new(Vec::new()));
        let mut inv = Invocation::new("describe-instances");
        inv.arg("--keyname abc");
        execute(&rec, &inv).unwrap();
        assert_eq!(
            rec.0.into_inner(),
            vec![vec!["describe-instances".to_string(), "--keyname abc".to_string()]]
        );
    }

    #[test]
    fn test_as005_execute_surfaces_failure() {
        let err = execute(&Unlaunchable, &Invocation::new("run-instances")).unwrap_err();
        assert!(matches!(err, AppscaleError::DispatchFailure { ref program, .. } if program == "run-instances"));
    }
}
