//! AppScale — AppScalefile-driven front end for the AppScale tools.
//!
//! Describe a deployment once in an `AppScalefile`, then drive it with
//! short directives (`init`, `up`, `status`, `deploy`, `destroy`) that are
//! translated into invocations of the installed `appscale-*` executables.

pub mod cli;
pub mod core;
pub mod transport;
