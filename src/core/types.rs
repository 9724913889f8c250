//! AS-001: Core types — option values, parsed configuration, profiles, invocations.

use super::error::AppscaleError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Parsed AppScalefile
// ============================================================================

/// A single option value from the AppScalefile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `key: true`, rendered as a bare `--key` flag.
    Flag,
    /// Any other scalar, kept in its string form.
    Scalar(String),
}

impl OptionValue {
    /// Truthiness used for optional keys such as `keyname`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag => true,
            Self::Scalar(s) => !(s.is_empty() || s == "false" || s == "0"),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "true"),
            Self::Scalar(s) => write!(f, "{}", s),
        }
    }
}

/// Decoded AppScalefile: option name to value, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    pub options: IndexMap<String, OptionValue>,
}

impl ParsedConfig {
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Value of `key` if present and truthy.
    pub fn truthy(&self, key: &str) -> Option<&OptionValue> {
        self.get(key).filter(|v| v.is_truthy())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, OptionValue)> for ParsedConfig {
    fn from_iter<I: IntoIterator<Item = (K, OptionValue)>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// Environment shape for `init` templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Cloud,
    Cluster,
}

impl Profile {
    /// The bundled template, copied verbatim by `init`.
    pub fn template(self) -> &'static str {
        match self {
            Self::Cloud => include_str!("../../templates/AppScalefile-cloud"),
            Self::Cluster => include_str!("../../templates/AppScalefile-cluster"),
        }
    }
}

impl FromStr for Profile {
    type Err = AppscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cloud" => Ok(Self::Cloud),
            "cluster" => Ok(Self::Cluster),
            other => Err(AppscaleError::InvalidProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cloud => write!(f, "cloud"),
            Self::Cluster => write!(f, "cluster"),
        }
    }
}

// ============================================================================
// Invocations
// ============================================================================

/// Argument vector for one downstream executable.
///
/// `program` is the bare tool name; the launcher decides how it resolves
/// on the host. Arguments are never shell-joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    /// `[program, arg0, arg1, ...]`
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
