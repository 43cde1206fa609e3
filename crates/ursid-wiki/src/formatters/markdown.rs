//! Markdown output formatting.

use crate::error::DataError;
use crate::models::BearRecord;

/// Format a list of bears as Markdown.
#[must_use]
pub fn format_bears_markdown(bears: &[BearRecord]) -> String {
    if bears.is_empty() {
        return "No bears found.".to_string();
    }

    let mut output = format!("# More bears ({} species)\n\n", bears.len());

    for bear in bears {
        output.push_str(&format_bear_markdown(bear));
        output.push('\n');
    }

    output
}

/// Format a single bear as Markdown.
#[must_use]
pub fn format_bear_markdown(bear: &BearRecord) -> String {
    format!(
        "#### {} ({})\n\n![{}]({})\n\n**Range:** {}\n",
        bear.name, bear.binomial, bear.name, bear.image, bear.range
    )
}

/// Text shown in place of the bear list when loading failed.
#[must_use]
pub fn format_load_error(err: &DataError) -> String {
    format!("Error: {}", err.to_user_message())
}
