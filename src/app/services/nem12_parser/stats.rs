//! Parsing statistics and result structures for NEM12 processing
//!
//! Skipped input never aborts a parse; instead each skip is recorded here as
//! a `Diagnostic` so callers can decide how to surface it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app::models::MeterRead;

/// Parsing result with meter reads and statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseResult {
    /// Meter reads in the order their blocks appeared
    pub meter_reads: Vec<MeterRead>,

    /// Parsing statistics and diagnostics
    pub stats: ParseStats,
}

impl ParseResult {
    /// An empty result for input that was rejected as a whole
    pub fn rejected(total_lines: usize, diagnostic: Diagnostic) -> Self {
        let mut stats = ParseStats::new();
        stats.total_lines = total_lines;
        stats.diagnostics.push(diagnostic);
        Self {
            meter_reads: Vec::new(),
            stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meter_reads.is_empty()
    }
}

/// Category of a skipped or rejected piece of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// File not framed by `100`/`900`; nothing was parsed
    MissingEnvelope,
    /// `200` header with a wrong-length NMI; block dropped
    InvalidIdentifier,
    /// `300` record with an unparseable date
    InvalidDate,
    /// `300` record with an unparseable volume or quality
    InvalidVolume,
    /// `300` record outside any open block
    OrphanRecord,
    /// Source could not be read; nothing was parsed
    Io,
}

impl DiagnosticKind {
    /// Whether this diagnostic means the whole file was rejected
    pub fn is_fatal(self) -> bool {
        matches!(self, DiagnosticKind::MissingEnvelope | DiagnosticKind::Io)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticKind::MissingEnvelope => "missing envelope",
            DiagnosticKind::InvalidIdentifier => "invalid identifier",
            DiagnosticKind::InvalidDate => "invalid date",
            DiagnosticKind::InvalidVolume => "invalid volume",
            DiagnosticKind::OrphanRecord => "orphan record",
            DiagnosticKind::Io => "i/o",
        };
        f.write_str(name)
    }
}

/// An advisory message about skipped input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based position among the non-blank lines (0 when not tied to a line)
    pub line_number: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line_number: usize, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            line_number,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line_number > 0 {
            write!(f, "line {}: {}: {}", self.line_number, self.kind, self.message)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of non-blank lines in the input
    pub total_lines: usize,

    /// Whether the `100`/`900` envelope was present
    pub envelope_valid: bool,

    /// Number of meter blocks emitted as reads
    pub blocks_parsed: usize,

    /// Number of `200` headers dropped for a bad NMI
    pub blocks_dropped: usize,

    /// Number of date records stored in a read
    pub records_parsed: usize,

    /// Number of date records inside a block that failed to parse
    pub records_skipped: usize,

    /// Number of date records found outside any block
    pub orphan_records: usize,

    /// Diagnostics in input order
    pub diagnostics: Vec<Diagnostic>,

    /// Diagnostics not stored because the configured cap was reached
    pub diagnostics_dropped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            envelope_valid: false,
            blocks_parsed: 0,
            blocks_dropped: 0,
            records_parsed: 0,
            records_skipped: 0,
            orphan_records: 0,
            diagnostics: Vec::new(),
            diagnostics_dropped: 0,
        }
    }

    /// Store a diagnostic unless `max_diagnostics` (0 = unlimited) is reached
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic, max_diagnostics: usize) {
        if max_diagnostics == 0 || self.diagnostics.len() < max_diagnostics {
            self.diagnostics.push(diagnostic);
        } else {
            self.diagnostics_dropped += 1;
        }
    }

    /// Total number of diagnostics raised, stored or not
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len() + self.diagnostics_dropped
    }

    /// Number of date records seen inside blocks
    pub fn total_records(&self) -> usize {
        self.records_parsed + self.records_skipped
    }

    /// Calculate record success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records() == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records() as f64) * 100.0
        }
    }

    /// Whether the file was accepted and nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.envelope_valid && self.diagnostic_count() == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
