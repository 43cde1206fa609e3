//! Bear species records.

use serde::{Deserialize, Serialize};

use crate::config::api;

/// One bear species recognised in a species table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearRecord {
    /// Display name, taken from the `name` wiki link.
    pub name: String,

    /// Scientific binomial name.
    pub binomial: String,

    /// Resolved image URL, or the placeholder path.
    pub image: String,

    /// Free-text habitat range.
    pub range: String,
}

/// Fields captured from one species row before image resolution.
///
/// Only exists when all four fields matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Text inside the `name=[[...]]` link.
    pub name: String,

    /// Text after `binomial=` up to the line break.
    pub binomial: String,

    /// Image lookup token, without the `File:` prefix.
    pub image_file: String,

    /// Range text as captured, possibly empty.
    pub range: String,
}

impl RawRow {
    /// Range to display: the captured text, or [`api::RANGE_DEFAULT`] when empty.
    #[must_use]
    pub fn range_or_default(&self) -> &str {
        if self.range.is_empty() { api::RANGE_DEFAULT } else { &self.range }
    }

    /// Finish the row with a resolved image.
    #[must_use]
    pub fn into_record(self, image: String) -> BearRecord {
        let range = self.range_or_default().to_string();
        BearRecord { name: self.name, binomial: self.binomial, image, range }
    }
}
