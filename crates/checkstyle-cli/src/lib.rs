//! Command-line conversion of pylint JSON output to Checkstyle XML.

pub mod convert;
pub mod input;

pub use convert::{ConvertOptions, ConvertSummary, run};
pub use input::{InputFormat, read_diagnostics};
