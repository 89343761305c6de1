//! Error types for building and rendering Checkstyle documents.

use thiserror::Error;

/// Result type alias for checkstyle-report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while accumulating or rendering diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// The severity class of a diagnostic code is not one of `C`, `R`, `W`, `E`, `F`.
    #[error("unmapped severity class '{class}' in message id '{code}'")]
    UnmappedSeverity { class: char, code: String },

    /// A diagnostic arrived without a message id.
    #[error("diagnostic for '{path}' has an empty message id")]
    EmptyCode { path: String },

    /// A diagnostic field violates its constraints (empty path, line 0).
    #[error("malformed diagnostic: {field} {reason}")]
    MalformedDiagnostic { field: &'static str, reason: String },

    /// A value contains a character that XML 1.0 cannot represent, even escaped.
    #[error("{field} contains character {character:?} which cannot be represented in XML")]
    UnrepresentableText { field: &'static str, character: char },

    /// The XML writer failed or produced bytes that are not UTF-8.
    #[error("failed to serialize checkstyle document: {0}")]
    Serialization(String),

    /// Writing the rendered document to the output sink failed.
    #[error("failed to write checkstyle document: {0}")]
    Io(#[from] std::io::Error),

    /// Report configuration could not be parsed.
    #[error("invalid report configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
