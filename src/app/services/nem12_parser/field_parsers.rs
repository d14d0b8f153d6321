//! Line tokenizing utilities for NEM12 records
//!
//! Every record is a comma-separated line whose first field is the record
//! tag. Fields are not trimmed: tags and codes must match exactly.

use crate::constants::{FIELD_SEPARATOR, fields};

/// Split a line into its comma-separated fields
///
/// Empty fields are preserved, so `"300,,1.0,A"` yields four fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Get the record tag (first field) of a line
pub fn record_tag(line: &str) -> &str {
    line.split(FIELD_SEPARATOR).next().unwrap_or_default()
}

/// Check whether a line carries the given record tag
pub fn has_tag(line: &str, tag: &str) -> bool {
    record_tag(line) == tag
}

/// Get a field by position, if present
pub fn get_field<'a>(record: &[&'a str], index: usize) -> Option<&'a str> {
    record.get(index).copied()
}

/// Get the tag of an already split record
pub fn get_tag<'a>(record: &[&'a str]) -> &'a str {
    get_field(record, fields::TAG).unwrap_or_default()
}
