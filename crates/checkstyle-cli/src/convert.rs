//! The convert pipeline: read diagnostics, build the report, write it out.

use crate::input::{InputFormat, read_diagnostics};
use anyhow::{Context, Result};
use checkstyle_report::{CheckstyleReporter, Diagnostic, ReportConfig, Reporter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Options for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Input file; `None` or `-` reads stdin.
    pub input: Option<PathBuf>,
    /// Output file; `None` or `-` writes stdout.
    pub output: Option<PathBuf>,
    pub input_format: InputFormat,
    /// TOML file with `source` / `version` settings.
    pub config: Option<PathBuf>,
    /// Overrides the configured `source` attribute.
    pub source: Option<String>,
    /// Drop diagnostics the report rejects instead of aborting.
    pub skip_invalid: bool,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub diagnostics: usize,
    pub skipped: usize,
    pub files: usize,
    /// Whether a document was written. Clean runs write nothing.
    pub written: bool,
}

fn is_stdio(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Resolve the report configuration from an optional file and a `--source` override.
pub fn load_config(path: Option<&Path>, source: Option<&str>) -> Result<ReportConfig> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            ReportConfig::from_toml_str(&content)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => ReportConfig::default(),
    };
    if let Some(source) = source {
        config = config.with_source(source);
    }
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdio(Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read diagnostics from stdin")?;
            Ok(content)
        }
    }
}

/// Feed `diagnostics` to a Checkstyle reporter and return the bytes it wrote.
///
/// Returns the rendered output (empty for a clean run), the number of
/// distinct files and the number of skipped diagnostics.
pub fn render_report(
    diagnostics: &[Diagnostic],
    config: ReportConfig,
    skip_invalid: bool,
) -> Result<(Vec<u8>, usize, usize)> {
    let mut reporter = CheckstyleReporter::with_config(Vec::new(), config);
    let mut skipped = 0;

    for (index, diagnostic) in diagnostics.iter().enumerate() {
        if let Err(err) = reporter.handle_message(diagnostic) {
            if !skip_invalid {
                return Err(err).with_context(|| {
                    format!(
                        "Rejected diagnostic #{} ({}:{})",
                        index + 1,
                        diagnostic.path,
                        diagnostic.line
                    )
                });
            }
            tracing::warn!(
                path = %diagnostic.path,
                line = diagnostic.line,
                code = %diagnostic.code,
                error = %err,
                "skipping diagnostic"
            );
            skipped += 1;
        }
    }

    reporter.display_messages()?;
    reporter.display_reports()?;
    let files = reporter.builder().file_count();
    Ok((reporter.into_inner(), files, skipped))
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) if !is_stdio(Some(path)) => fs::write(path, bytes)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}

/// Run a full conversion.
pub fn run(options: &ConvertOptions) -> Result<ConvertSummary> {
    let config = load_config(options.config.as_deref(), options.source.as_deref())?;
    let content = read_input(options.input.as_deref())?;
    let diagnostics = read_diagnostics(&content, options.input_format)?;

    let (bytes, files, skipped) = render_report(&diagnostics, config, options.skip_invalid)?;

    let written = !bytes.is_empty();
    if written {
        write_output(options.output.as_deref(), &bytes)?;
    }

    tracing::info!(
        diagnostics = diagnostics.len(),
        skipped,
        files,
        written,
        "checkstyle conversion finished"
    );

    Ok(ConvertSummary {
        diagnostics: diagnostics.len(),
        skipped,
        files,
        written,
    })
}
