//! Reporter lifecycle adapter.
//!
//! A linter drives a reporter through three hooks: one call per message,
//! one call when messages should be displayed, and one call for summary
//! reports. The Checkstyle reporter buffers messages in a
//! [`DocumentBuilder`] and writes the whole document in one go.

use crate::config::ReportConfig;
use crate::{Diagnostic, DocumentBuilder, Result};
use std::collections::BTreeMap;
use std::io::Write;

/// Hooks a linter calls on its output reporter.
pub trait Reporter {
    /// Short name used to select the reporter.
    fn name(&self) -> &'static str;

    /// File extension for reports written to disk.
    fn extension(&self) -> &'static str;

    /// Receive one diagnostic.
    fn handle_message(&mut self, diagnostic: &Diagnostic) -> Result<()>;

    /// Write out everything received so far.
    fn display_messages(&mut self) -> Result<()>;

    /// Write summary reports, if the format has any.
    fn display_reports(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Name the Checkstyle reporter is registered under.
pub const CHECKSTYLE: &str = "checkstyle";

/// Writes a Checkstyle document to `out`.
pub struct CheckstyleReporter<W: Write> {
    builder: DocumentBuilder,
    out: W,
}

impl<W: Write> CheckstyleReporter<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, ReportConfig::default())
    }

    pub fn with_config(out: W, config: ReportConfig) -> Self {
        Self {
            builder: DocumentBuilder::with_config(config),
            out,
        }
    }

    pub fn builder(&self) -> &DocumentBuilder {
        &self.builder
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for CheckstyleReporter<W> {
    fn name(&self) -> &'static str {
        CHECKSTYLE
    }

    fn extension(&self) -> &'static str {
        "xml"
    }

    fn handle_message(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.builder.add(diagnostic)
    }

    /// Writes the document followed by a newline, or nothing for a clean run.
    fn display_messages(&mut self) -> Result<()> {
        if let Some(xml) = self.builder.render()? {
            writeln!(self.out, "{xml}")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Constructor for a boxed reporter writing to the given sink.
pub type ReporterFactory = fn(Box<dyn Write>, ReportConfig) -> Box<dyn Reporter>;

/// Reporters selectable by name.
#[derive(Default)]
pub struct ReporterRegistry {
    factories: BTreeMap<&'static str, ReporterFactory>,
}

impl ReporterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every reporter this crate provides.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        register_checkstyle(&mut registry);
        registry
    }

    pub fn register(&mut self, name: &'static str, factory: ReporterFactory) {
        self.factories.insert(name, factory);
    }

    /// Build the reporter registered as `name`.
    pub fn create(
        &self,
        name: &str,
        out: Box<dyn Write>,
        config: ReportConfig,
    ) -> Option<Box<dyn Reporter>> {
        self.factories.get(name).map(|factory| factory(out, config))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

/// Register the Checkstyle reporter.
pub fn register_checkstyle(registry: &mut ReporterRegistry) {
    registry.register(CHECKSTYLE, create_checkstyle);
}

fn create_checkstyle(out: Box<dyn Write>, config: ReportConfig) -> Box<dyn Reporter> {
    Box::new(CheckstyleReporter::with_config(out, config))
}
