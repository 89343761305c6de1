//! Mapping from message-id class codes to Checkstyle severities.

use crate::{Error, Result};
use std::fmt;

/// The three severity levels the Checkstyle dialect understands.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Severity {
    /// Convention messages.
    Info,
    /// Refactoring suggestions and warnings.
    Warning,
    /// Errors and fatal messages.
    Error,
}

impl Severity {
    /// Map a single class character (the first character of a message id) to a severity.
    ///
    /// The class vocabulary is closed: `C` maps to [`Severity::Info`], `R` and `W` to
    /// [`Severity::Warning`], `E` and `F` to [`Severity::Error`]. Any other character is
    /// reported as [`Error::UnmappedSeverity`] rather than guessed.
    pub fn from_class_code(class: char) -> Result<Self> {
        match class {
            'C' => Ok(Severity::Info),
            'R' | 'W' => Ok(Severity::Warning),
            'E' | 'F' => Ok(Severity::Error),
            other => Err(Error::UnmappedSeverity {
                class: other,
                code: other.to_string(),
            }),
        }
    }

    /// Map a full message id such as `W0611` using its first character.
    pub(crate) fn from_message_id(code: &str) -> Result<Self> {
        let class = code.chars().next().ok_or_else(|| Error::MalformedDiagnostic {
            field: "code",
            reason: "must not be empty".to_string(),
        })?;
        Self::from_class_code(class).map_err(|err| match err {
            Error::UnmappedSeverity { class, .. } => Error::UnmappedSeverity {
                class,
                code: code.to_string(),
            },
            other => other,
        })
    }

    /// The attribute value written to `severity="..."`.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
