//! JSON output formatting.

use serde_json::{Value, json};

use crate::error::DataError;
use crate::models::BearRecord;

/// Wrap a bear list with its count.
#[must_use]
pub fn bears_json(bears: &[BearRecord]) -> Value {
    json!({
        "count": bears.len(),
        "bears": bears,
    })
}

/// JSON body for a failed load.
#[must_use]
pub fn error_json(err: &DataError) -> Value {
    json!({ "error": err.to_user_message() })
}
