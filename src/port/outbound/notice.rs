//! Load-status notices surfaced to the user.

use std::fmt;

use crate::error::LoadError;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A message for the front-end to show next to the match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&LoadError> for Notice {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::ConfigurationMissing => Self::info(err.to_string()),
            LoadError::RemoteRequestFailed { .. } | LoadError::ResponseShapeInvalid { .. } => {
                Self::error(format!("{err}, showing sample matches"))
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "info: {}", self.message),
            Severity::Error => write!(f, "error: {}", self.message),
        }
    }
}
