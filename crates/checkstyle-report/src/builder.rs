//! Accumulation of diagnostics into per-file groups.

use crate::config::ReportConfig;
use crate::escape::{check_representable, escape_attribute};
use crate::severity::Severity;
use crate::writer::write_document;
use crate::{Diagnostic, Error, Result};
use indexmap::IndexMap;
use indexmap::map::Entry;

/// One `<error>` element, with every attribute value ready to be written.
///
/// `message` is already XML-escaped (`CODE: escaped message`); the writer
/// emits it verbatim. `source` is escaped when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedError {
    pub column: String,
    pub line: String,
    pub message: String,
    pub severity: Severity,
    pub source: String,
}

/// All diagnostics reported for a single path, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub path: String,
    pub entries: Vec<RenderedError>,
}

/// Collects diagnostics and renders them as a Checkstyle document.
///
/// File groups are kept in the order their path was first seen; entries
/// within a group keep the order they were added. Nothing is sorted or
/// deduplicated.
///
/// # Example
///
/// ```rust
/// use checkstyle_report::{Diagnostic, DocumentBuilder};
///
/// let mut builder = DocumentBuilder::new();
/// assert_eq!(builder.render().unwrap(), None);
///
/// builder
///     .add(&Diagnostic::new("b.py", 1, 0, "W0611", "unused import"))
///     .unwrap();
/// let xml = builder.render().unwrap().unwrap();
/// assert!(xml.contains(r#"<file name="b.py">"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    config: ReportConfig,
    files: IndexMap<String, FileGroup>,
}

impl DocumentBuilder {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration.
    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            config,
            files: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Add one diagnostic.
    ///
    /// The diagnostic is validated and its entry fully built before the
    /// document is touched, so an error leaves the builder unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCode`] if the message id is empty
    /// - [`Error::MalformedDiagnostic`] for an empty path or line 0
    /// - [`Error::UnmappedSeverity`] if the message id class is not `C R W E F`
    /// - [`Error::UnrepresentableText`] if path or message hold characters XML cannot carry
    pub fn add(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        let entry = self.render_entry(diagnostic)?;

        match self.files.entry(diagnostic.path.clone()) {
            Entry::Occupied(mut group) => group.get_mut().entries.push(entry),
            Entry::Vacant(slot) => {
                tracing::debug!(path = %diagnostic.path, "new file group");
                slot.insert(FileGroup {
                    path: diagnostic.path.clone(),
                    entries: vec![entry],
                });
            }
        }

        tracing::trace!(
            path = %diagnostic.path,
            line = diagnostic.line,
            code = %diagnostic.code,
            "added diagnostic"
        );
        Ok(())
    }

    fn render_entry(&self, diagnostic: &Diagnostic) -> Result<RenderedError> {
        if diagnostic.code.is_empty() {
            return Err(Error::EmptyCode {
                path: diagnostic.path.clone(),
            });
        }
        if diagnostic.path.is_empty() {
            return Err(Error::MalformedDiagnostic {
                field: "path",
                reason: "must not be empty".to_string(),
            });
        }
        if diagnostic.line == 0 {
            return Err(Error::MalformedDiagnostic {
                field: "line",
                reason: "must be at least 1".to_string(),
            });
        }
        check_representable("path", &diagnostic.path)?;
        check_representable("code", &diagnostic.code)?;
        check_representable("message", &diagnostic.message)?;

        let severity = Severity::from_message_id(&diagnostic.code)?;

        Ok(RenderedError {
            column: diagnostic.column.to_string(),
            line: diagnostic.line.to_string(),
            message: format!(
                "{}: {}",
                escape_attribute(&diagnostic.code),
                escape_attribute(&diagnostic.message)
            ),
            severity,
            source: self.config.source.clone(),
        })
    }

    /// Whether no diagnostic has been added yet.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of distinct paths seen so far.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// File groups in first-seen order.
    pub fn files(&self) -> impl Iterator<Item = &FileGroup> {
        self.files.values()
    }

    /// The group for `path`, if any diagnostic was added for it.
    pub fn file(&self, path: &str) -> Option<&FileGroup> {
        self.files.get(path)
    }

    /// Render the accumulated document.
    ///
    /// Returns `Ok(None)` when no diagnostic was ever added: a clean run
    /// produces no output at all, not an empty `<checkstyle>` element.
    /// Rendering does not consume the builder and is repeatable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableText`] if the configured `source` or
    /// `version` cannot be written as XML, and [`Error::Serialization`] if
    /// the XML writer fails.
    pub fn render(&self) -> Result<Option<String>> {
        if self.files.is_empty() {
            tracing::debug!("no diagnostics, skipping checkstyle output");
            return Ok(None);
        }
        self.config.validate()?;
        write_document(&self.config.version, self.files.values()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(path: &str, line: u32, code: &str, message: &str) -> Diagnostic {
        Diagnostic::new(path, line, 0, code, message)
    }

    #[test]
    fn empty_builder_renders_nothing() {
        let builder = DocumentBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.render().unwrap(), None);
    }

    #[test]
    fn groups_by_first_seen_path() {
        let mut builder = DocumentBuilder::new();
        builder.add(&diag("z.py", 1, "C0111", "a")).unwrap();
        builder.add(&diag("a.py", 2, "W0611", "b")).unwrap();
        builder.add(&diag("z.py", 3, "E1101", "c")).unwrap();

        let paths: Vec<&str> = builder.files().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["z.py", "a.py"]);
        assert_eq!(builder.file_count(), 2);

        let lines: Vec<&str> = builder
            .file("z.py")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.line.as_str())
            .collect();
        assert_eq!(lines, ["1", "3"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut builder = DocumentBuilder::new();
        let d = diag("a.py", 1, "W0611", "unused import");
        builder.add(&d).unwrap();
        builder.add(&d).unwrap();
        assert_eq!(builder.file("a.py").unwrap().entries.len(), 2);
    }

    #[test]
    fn entry_fields() {
        let mut builder = DocumentBuilder::new();
        builder
            .add(&Diagnostic::new("a.py", 3, 7, "E0001", "syntax <error>"))
            .unwrap();
        let entry = &builder.file("a.py").unwrap().entries[0];
        assert_eq!(entry.column, "7");
        assert_eq!(entry.line, "3");
        assert_eq!(entry.message, "E0001: syntax &lt;error&gt;");
        assert_eq!(entry.severity, Severity::Error);
        assert_eq!(entry.source, "pylint");
    }

    #[test]
    fn configured_source() {
        let mut builder = DocumentBuilder::with_config(ReportConfig::default().with_source("ruff"));
        builder.add(&diag("a.py", 1, "R0201", "x")).unwrap();
        assert_eq!(builder.file("a.py").unwrap().entries[0].source, "ruff");
    }

    #[test]
    fn unrepresentable_source_fails_render() {
        let mut builder =
            DocumentBuilder::with_config(ReportConfig::default().with_source("py\u{1}lint"));
        builder.add(&diag("a.py", 1, "W0611", "x")).unwrap();
        assert!(matches!(
            builder.render(),
            Err(Error::UnrepresentableText {
                field: "source",
                character: '\u{1}'
            })
        ));
    }

    #[test]
    fn unmapped_severity_leaves_state_unchanged() {
        let mut builder = DocumentBuilder::new();
        builder.add(&diag("a.py", 1, "W0611", "ok")).unwrap();
        let before = builder.render().unwrap();

        let err = builder.add(&diag("b.py", 2, "Z9999", "bad")).unwrap_err();
        assert!(matches!(err, Error::UnmappedSeverity { class: 'Z', .. }));
        assert!(builder.file("b.py").is_none());
        assert_eq!(builder.render().unwrap(), before);
    }

    #[test]
    fn empty_code_is_rejected() {
        let mut builder = DocumentBuilder::new();
        let err = builder.add(&diag("a.py", 1, "", "x")).unwrap_err();
        assert!(matches!(err, Error::EmptyCode { ref path } if path == "a.py"));
        assert!(builder.is_empty());
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let mut builder = DocumentBuilder::new();
        assert!(matches!(
            builder.add(&diag("", 1, "W0611", "x")),
            Err(Error::MalformedDiagnostic { field: "path", .. })
        ));
        assert!(matches!(
            builder.add(&diag("a.py", 0, "W0611", "x")),
            Err(Error::MalformedDiagnostic { field: "line", .. })
        ));
        assert!(matches!(
            builder.add(&diag("a.py", 1, "W0611", "nul\u{0}")),
            Err(Error::UnrepresentableText { field: "message", .. })
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn add_after_render_extends_document() {
        let mut builder = DocumentBuilder::new();
        builder.add(&diag("a.py", 1, "W0611", "x")).unwrap();
        let first = builder.render().unwrap().unwrap();
        builder.add(&diag("b.py", 1, "C0103", "y")).unwrap();
        let second = builder.render().unwrap().unwrap();
        assert!(!first.contains("b.py"));
        assert!(second.contains(r#"<file name="b.py">"#));
    }
}
