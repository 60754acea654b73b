//! User-facing results of proxied operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminated result of an operation, ready to be rendered.
///
/// A warning is still a success: the operation went through, but something
/// the user should know about happened on the way (e.g. the postal code could
/// not be verified).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    pub severity: Severity,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            severity: Severity::Ok,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Success message, downgraded to a warning when an advisory is attached.
    pub fn succeeded(message: impl Into<String>, advisory: Option<&str>) -> Self {
        match advisory {
            Some(advisory) => Self::warning(format!("{} {}", message.into(), advisory)),
            None => Self::ok(message),
        }
    }
}

/// Result of a list operation.
///
/// Lists never fail: when the backend cannot be read, `items` is empty and
/// `warning` explains why.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub warning: Option<Outcome>,
}

impl<T> Listing<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self {
            items,
            warning: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            warning: Some(Outcome::warning(message)),
        }
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::loaded(Vec::new())
    }
}
