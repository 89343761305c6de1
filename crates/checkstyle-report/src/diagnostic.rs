//! The diagnostic record handed to the report builder.

/// One static-analysis finding.
///
/// `code` is the message id (for example `W0611`); its first character is the
/// severity class. `message` is raw text and is escaped when the report is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path of the file the finding belongs to, as reported by the analyzer.
    pub path: String,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column offset.
    pub column: u32,
    /// Message id, e.g. `C0301`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        path: impl Into<String>,
        line: u32,
        column: u32,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            code: code.into(),
            message: message.into(),
        }
    }
}
