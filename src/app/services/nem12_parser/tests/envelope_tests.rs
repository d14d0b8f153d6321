//! Tests for envelope validation

use super::*;
use crate::Error;
use crate::app::services::nem12_parser::envelope::{has_valid_envelope, validate_envelope};

#[test]
fn test_valid_envelope() {
    assert!(has_valid_envelope(&create_single_block_lines()));
    assert!(has_valid_envelope(&["100", "900"]));
}

#[test]
fn test_empty_input_is_invalid() {
    let lines: Vec<String> = Vec::new();
    assert!(!has_valid_envelope(&lines));

    let result = validate_envelope(&lines, "empty.csv");
    assert!(matches!(result, Err(Error::MissingEnvelope { .. })));
}

#[test]
fn test_single_line_cannot_be_both_markers() {
    assert!(!has_valid_envelope(&["100"]));
    assert!(!has_valid_envelope(&["900"]));
}

#[test]
fn test_missing_begin_marker() {
    let lines = ["200,1234567890", "300,20200101,1.0,A", "900"];
    let err = validate_envelope(&lines, "file.csv").unwrap_err();
    assert!(err.to_string().contains("first line"));
    assert!(err.to_string().contains("file.csv"));
}

#[test]
fn test_missing_end_marker() {
    let lines = ["100", "200,1234567890", "300,20200101,1.0,A"];
    let err = validate_envelope(&lines, "file.csv").unwrap_err();
    assert!(err.to_string().contains("last line"));
}

#[test]
fn test_markers_require_whole_line_match() {
    // A leading-field match is not enough.
    assert!(!has_valid_envelope(&["100,extra", "900"]));
    assert!(!has_valid_envelope(&["100", "900,extra"]));
    assert!(!has_valid_envelope(&["100 ", "900"]));
}

#[test]
fn test_markers_in_wrong_order() {
    assert!(!has_valid_envelope(&["900", "100"]));
}
