//! Reading pylint JSON output into diagnostics.

use anyhow::{Context, Result};
use checkstyle_report::Diagnostic;
use clap::ValueEnum;
use serde::Deserialize;

/// Layout of the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Detect from the first non-whitespace character (`[` means a JSON array)
    #[default]
    Auto,
    /// A single JSON array of messages, as written by `pylint --output-format=json`
    Json,
    /// One JSON message object per line
    Jsonl,
}

/// One message as pylint serializes it. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct PylintMessage {
    path: String,
    line: u32,
    column: u32,
    #[serde(rename = "message-id", alias = "msg_id")]
    message_id: String,
    message: String,
}

impl From<PylintMessage> for Diagnostic {
    fn from(msg: PylintMessage) -> Self {
        Diagnostic::new(msg.path, msg.line, msg.column, msg.message_id, msg.message)
    }
}

/// Parse `content` into diagnostics, in input order.
pub fn read_diagnostics(content: &str, format: InputFormat) -> Result<Vec<Diagnostic>> {
    let format = match format {
        InputFormat::Auto => detect_format(content),
        other => other,
    };
    tracing::debug!(?format, "reading diagnostics");

    match format {
        InputFormat::Json | InputFormat::Auto => {
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            let messages: Vec<PylintMessage> =
                serde_json::from_str(content).context("Failed to parse JSON message array")?;
            Ok(messages.into_iter().map(Diagnostic::from).collect())
        }
        InputFormat::Jsonl => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str::<PylintMessage>(line)
                    .map(Diagnostic::from)
                    .with_context(|| format!("Failed to parse JSON message on line {}", index + 1))
            })
            .collect(),
    }
}

fn detect_format(content: &str) -> InputFormat {
    match content.trim_start().chars().next() {
        Some('{') => InputFormat::Jsonl,
        _ => InputFormat::Json,
    }
}
