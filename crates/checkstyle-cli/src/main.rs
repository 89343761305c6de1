//! to-checkstyle - Main entry point

use anyhow::Result;
use checkstyle_cli::{ConvertOptions, InputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "to_checkstyle=warn,checkstyle_cli=warn,checkstyle_report=warn";

#[derive(Parser)]
#[command(name = "to-checkstyle")]
#[command(version)]
#[command(about = "Convert pylint JSON messages to a Checkstyle XML report", long_about = None)]
struct Cli {
    /// Input file with pylint JSON output ('-' or omitted reads stdin)
    input: Option<PathBuf>,

    /// Write the report to FILE ('-' or omitted writes stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input layout
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    input_format: InputFormat,

    /// TOML file with report settings (source, version)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Value of the `source` attribute on every error (default: pylint)
    #[arg(long)]
    source: Option<String>,

    /// Drop diagnostics that cannot be reported instead of aborting
    #[arg(long)]
    skip_invalid: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let options = ConvertOptions {
        input: cli.input,
        output: cli.output,
        input_format: cli.input_format,
        config: cli.config,
        source: cli.source,
        skip_invalid: cli.skip_invalid,
    };

    checkstyle_cli::run(&options)?;
    Ok(())
}
