//! Tests for parsing statistics functionality

use crate::app::services::nem12_parser::stats::{
    Diagnostic, DiagnosticKind, ParseResult, ParseStats,
};

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        records_parsed: 95,
        records_skipped: 5,
        ..ParseStats::new()
    };

    assert_eq!(stats.total_records(), 100);
    assert_eq!(stats.success_rate(), 95.0);
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_lines, 0);
    assert_eq!(empty_stats.records_parsed, 0);
    assert!(empty_stats.diagnostics.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_clean());
}

#[test]
fn test_push_diagnostic_unlimited() {
    let mut stats = ParseStats::new();
    for line in 1..=5 {
        stats.push_diagnostic(Diagnostic::new(line, DiagnosticKind::InvalidDate, "bad"), 0);
    }
    assert_eq!(stats.diagnostics.len(), 5);
    assert_eq!(stats.diagnostics_dropped, 0);
}

#[test]
fn test_clean_requires_valid_envelope_and_no_diagnostics() {
    let mut stats = ParseStats {
        envelope_valid: true,
        ..ParseStats::new()
    };
    assert!(stats.is_clean());

    stats.push_diagnostic(
        Diagnostic::new(3, DiagnosticKind::OrphanRecord, "orphan"),
        0,
    );
    assert!(!stats.is_clean());
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::new(4, DiagnosticKind::InvalidVolume, "'x' is not a decimal");
    assert_eq!(diagnostic.to_string(), "line 4: invalid volume: 'x' is not a decimal");

    let diagnostic = Diagnostic::new(0, DiagnosticKind::Io, "file not found");
    assert_eq!(diagnostic.to_string(), "i/o: file not found");
}

#[test]
fn test_fatal_kinds() {
    assert!(DiagnosticKind::MissingEnvelope.is_fatal());
    assert!(DiagnosticKind::Io.is_fatal());
    assert!(!DiagnosticKind::InvalidIdentifier.is_fatal());
    assert!(!DiagnosticKind::InvalidDate.is_fatal());
}

#[test]
fn test_rejected_result() {
    let result = ParseResult::rejected(
        7,
        Diagnostic::new(0, DiagnosticKind::MissingEnvelope, "no 900"),
    );

    assert!(result.is_empty());
    assert_eq!(result.stats.total_lines, 7);
    assert!(!result.stats.envelope_valid);
    assert_eq!(result.stats.diagnostics.len(), 1);
}

#[test]
fn test_stats_serialization() {
    let mut stats = ParseStats::new();
    stats.push_diagnostic(Diagnostic::new(2, DiagnosticKind::InvalidIdentifier, "short"), 0);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["diagnostics"][0]["kind"], "invalid_identifier");
    assert_eq!(json["diagnostics"][0]["line_number"], 2);
}
