//! Projection of a submission entry onto the flat webhook record.
//!
//! The table below mirrors the field layout of the recognized form. When that
//! form's fields are added, removed, or renumbered, this table has to change
//! with it.

use crate::error::ForwarderError;
use crate::models::form::SubmissionEntry;
use crate::models::webhook::OutputRecord;

/// Output key and the entry field path it is read from.
pub const FIELD_MAP: [(&str, &str); 5] = [
    ("name", "1"),
    ("name_first", "1.3"),
    ("name_last", "1.6"),
    ("email", "2"),
    ("message", "3"),
];

fn source_path(key: &str) -> &'static str {
    FIELD_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, path)| *path)
        .unwrap_or_default()
}

/// Build the output record; fields absent from `entry` become empty strings.
pub fn project(entry: &SubmissionEntry) -> OutputRecord {
    let value = |key: &str| entry.value_or_empty(source_path(key)).to_string();

    OutputRecord {
        name: value("name"),
        name_first: value("name_first"),
        name_last: value("name_last"),
        email: value("email"),
        message: value("message"),
    }
}

/// Compact JSON encoding of the record, keys in `FIELD_MAP` order.
pub fn serialize(record: &OutputRecord) -> Result<String, ForwarderError> {
    Ok(serde_json::to_string(record)?)
}
