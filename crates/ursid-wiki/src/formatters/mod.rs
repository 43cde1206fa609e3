//! Output formatters for Markdown and JSON.

mod json;
mod markdown;

pub use self::json::*;
pub use markdown::*;

use crate::error::DataError;
use crate::models::BearRecord;

/// Output format for rendered bear lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable Markdown
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Render the outcome of a bear load in `format`.
#[must_use]
pub fn render(result: &Result<Vec<BearRecord>, DataError>, format: OutputFormat) -> String {
    match (format, result) {
        (OutputFormat::Markdown, Ok(bears)) => format_bears_markdown(bears),
        (OutputFormat::Markdown, Err(e)) => format_load_error(e),
        (OutputFormat::Json, Ok(bears)) => pretty(&bears_json(bears)),
        (OutputFormat::Json, Err(e)) => pretty(&error_json(e)),
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
