//! Checkstyle XML reports from lint diagnostics.
//!
//! Diagnostics are fed one at a time to a [`DocumentBuilder`], which groups
//! them by file in first-seen order and maps each message id's class
//! character to a Checkstyle [`Severity`]. [`DocumentBuilder::render`]
//! produces the final document, or nothing at all when no diagnostic was
//! added.
//!
//! # Example
//!
//! ```rust
//! use checkstyle_report::{Diagnostic, DocumentBuilder};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.add(&Diagnostic::new("a.py", 3, 1, "E0001", "syntax <error>")).unwrap();
//!
//! let xml = builder.render().unwrap().unwrap();
//! assert!(xml.starts_with("<?xml version=\"1.0\" ?>\n<checkstyle version=\"0.0.0\">"));
//! assert!(xml.contains(r#"message="E0001: syntax &lt;error&gt;" severity="error""#));
//! ```
//!
//! The [`reporter`] module wraps the builder in the message/display hooks a
//! linter drives its reporters through.

pub mod builder;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod escape;
pub mod reporter;
pub mod severity;
mod writer;

// Re-export main types
pub use builder::{DocumentBuilder, FileGroup, RenderedError};
pub use config::ReportConfig;
pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use reporter::{CheckstyleReporter, Reporter, ReporterRegistry};
pub use severity::Severity;
