//! AS-002: AppScalefile location, read, and templated creation.
//!
//! The working directory is always passed in; nothing here consults the
//! process cwd.

use super::error::{AppscaleError, Result};
use super::types::Profile;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Fixed name of the configuration file.
pub const APPSCALEFILE: &str = "AppScalefile";

/// Derive the AppScalefile path for a working directory.
pub fn location(workdir: &Path) -> PathBuf {
    workdir.join(APPSCALEFILE)
}

/// Read the AppScalefile in `workdir`.
///
/// Opening is the existence check: any open failure (not found, permission
/// denied, ...) and a path that is not a regular file are reported as
/// `ConfigMissing`. Content that is not UTF-8 is `MalformedConfig`.
pub fn read(workdir: &Path) -> Result<String> {
    let path = location(workdir);
    let missing = || AppscaleError::ConfigMissing {
        dir: workdir.to_path_buf(),
    };
    let mut file = File::open(&path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "AppScalefile open failed");
        missing()
    })?;

    // A directory (or other non-file) opens fine on unix but is not an AppScalefile.
    let is_file = file.metadata().map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        tracing::debug!(path = %path.display(), "AppScalefile is not a regular file");
        return Err(missing());
    }

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| match source.kind() {
            ErrorKind::InvalidData => {
                AppscaleError::MalformedConfig("contents are not valid UTF-8".to_string())
            }
            _ => AppscaleError::Io {
                path: path.clone(),
                source,
            },
        })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read AppScalefile");
    Ok(contents)
}

/// Copy the template for `profile` into `workdir`, returning the written path.
///
/// Fails with `ConfigAlreadyExists` before looking at the profile, and with
/// `InvalidProfile` without creating anything.
pub fn write_template(workdir: &Path, profile: &str) -> Result<PathBuf> {
    let path = location(workdir);
    if path.exists() {
        return Err(AppscaleError::ConfigAlreadyExists { path });
    }

    let profile: Profile = profile.parse()?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => AppscaleError::ConfigAlreadyExists { path: path.clone() },
            _ => AppscaleError::Io {
                path: path.clone(),
                source,
            },
        })?;
    file.write_all(profile.template().as_bytes())
        .map_err(|source| AppscaleError::Io {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), %profile, "wrote AppScalefile template");
    Ok(path)
}
