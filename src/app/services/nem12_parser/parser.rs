//! Core NEM12 parser implementation
//!
//! This module handles file reading, envelope validation and segmentation of
//! the line stream into meter blocks, delegating each date record to the
//! record parser.

use std::path::Path;
use tracing::{debug, info, warn};

use super::envelope::validate_envelope;
use super::field_parsers::{get_field, get_tag, has_tag, split_fields};
use super::record_parser::parse_date_record;
use super::stats::{Diagnostic, DiagnosticKind, ParseResult, ParseStats};
use crate::app::models::{EnergyUnit, MeterRead};
use crate::config::ParserConfig;
use crate::constants::{NMI_LENGTH, fields, record_tags};
use crate::{Error, Result};

/// Label used for diagnostics when input does not come from a file
const IN_MEMORY_SOURCE: &str = "<memory>";

/// Parser for simple NEM12 files
///
/// Holds only configuration, so one parser can be shared across threads and
/// used for any number of files.
#[derive(Debug, Clone, Default)]
pub struct Nem12Parser {
    config: ParserConfig,
}

impl Nem12Parser {
    /// Create a parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a file, returning an empty result if it cannot be read or has no
    /// valid envelope
    pub fn parse_file(&self, file_path: &Path) -> ParseResult {
        info!("Parsing NEM12 file: {}", file_path.display());

        match read_lines(file_path) {
            Ok(lines) => self.parse_lines_from(&lines, &file_path.display().to_string()),
            Err(e) => {
                warn!("Failed to read {}: {}", file_path.display(), e);
                ParseResult::rejected(0, Diagnostic::new(0, DiagnosticKind::Io, e.to_string()))
            }
        }
    }

    /// Parse a file, surfacing read failures and a missing envelope as errors
    pub fn parse_file_strict(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing NEM12 file (strict): {}", file_path.display());

        let lines = read_lines(file_path)?;
        self.parse_validated(&lines, &file_path.display().to_string())
    }

    /// Parse a file using the configured envelope policy
    pub fn process_file(&self, file_path: &Path) -> Result<ParseResult> {
        if self.config.strict_envelope {
            self.parse_file_strict(file_path)
        } else {
            Ok(self.parse_file(file_path))
        }
    }

    /// Parse text content, ignoring blank lines
    pub fn parse_str(&self, content: &str) -> ParseResult {
        let lines = non_blank_lines(content);
        self.parse_lines(&lines)
    }

    /// Parse a sequence of non-blank lines
    ///
    /// Never fails: a missing envelope yields an empty result and malformed
    /// records are skipped, with each skip recorded in the statistics.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> ParseResult {
        self.parse_lines_from(lines, IN_MEMORY_SOURCE)
    }

    /// Parse a sequence of non-blank lines, surfacing a missing envelope as
    /// an error
    pub fn parse_lines_strict<S: AsRef<str>>(&self, lines: &[S]) -> Result<ParseResult> {
        self.parse_validated(lines, IN_MEMORY_SOURCE)
    }

    fn parse_lines_from<S: AsRef<str>>(&self, lines: &[S], source: &str) -> ParseResult {
        match self.parse_validated(lines, source) {
            Ok(result) => result,
            Err(e) => {
                warn!("Rejecting {}: {}", source, e);
                ParseResult::rejected(
                    lines.len(),
                    Diagnostic::new(0, DiagnosticKind::MissingEnvelope, e.to_string()),
                )
            }
        }
    }

    /// Validate the envelope, then segment the lines into meter reads
    fn parse_validated<S: AsRef<str>>(&self, lines: &[S], source: &str) -> Result<ParseResult> {
        validate_envelope(lines, source)?;

        let mut stats = ParseStats::new();
        stats.total_lines = lines.len();
        stats.envelope_valid = true;

        let meter_reads = self.segment_blocks(lines, &mut stats);

        info!(
            "Parsed {} meter reads with {} records from {} lines",
            stats.blocks_parsed, stats.records_parsed, stats.total_lines
        );
        if stats.diagnostic_count() > 0 {
            debug!("{} lines skipped in {}", stats.diagnostic_count(), source);
        }

        Ok(ParseResult { meter_reads, stats })
    }

    /// Walk the lines once, opening a block at each valid `200` header and
    /// feeding it the `300` records that immediately follow
    fn segment_blocks<S: AsRef<str>>(&self, lines: &[S], stats: &mut ParseStats) -> Vec<MeterRead> {
        let mut meter_reads = Vec::new();
        let mut index = 0;

        while index < lines.len() {
            let line = lines[index].as_ref();
            let line_number = index + 1;
            let record = split_fields(line);
            index += 1;

            match get_tag(&record) {
                record_tags::BLOCK_START => {
                    let nmi = get_field(&record, fields::NMI).unwrap_or_default();
                    if nmi.chars().count() != NMI_LENGTH {
                        stats.blocks_dropped += 1;
                        let error = Error::invalid_identifier(nmi, NMI_LENGTH);
                        self.report(stats, line_number, DiagnosticKind::InvalidIdentifier, error);
                        continue;
                    }

                    let mut meter_read = MeterRead::new(nmi, EnergyUnit::Kwh);

                    // Bounds check first: never rely on the end marker's tag.
                    while index < lines.len()
                        && has_tag(lines[index].as_ref(), record_tags::DATE_RECORD)
                    {
                        let record_line = lines[index].as_ref();
                        self.parse_block_record(record_line, index + 1, &mut meter_read, stats);
                        index += 1;
                    }

                    debug!(
                        "Closed block for NMI {} with {} volumes",
                        meter_read.nmi,
                        meter_read.volumes.len()
                    );
                    stats.blocks_parsed += 1;
                    meter_reads.push(meter_read);
                }
                record_tags::DATE_RECORD => {
                    stats.orphan_records += 1;
                    self.report_message(
                        stats,
                        line_number,
                        DiagnosticKind::OrphanRecord,
                        format!("record outside any meter block: '{}'", line),
                    );
                }
                _ => {}
            }
        }

        meter_reads
    }

    /// Parse one `300` line into the open block
    fn parse_block_record(
        &self,
        line: &str,
        line_number: usize,
        meter_read: &mut MeterRead,
        stats: &mut ParseStats,
    ) {
        let record = split_fields(line);
        let parsed = parse_date_record(&record);

        if let Err(e) = &parsed.date {
            self.report_message(
                stats,
                line_number,
                DiagnosticKind::InvalidDate,
                format!("{} in '{}'", e, line),
            );
        }
        if let Err(e) = &parsed.volume {
            self.report_message(
                stats,
                line_number,
                DiagnosticKind::InvalidVolume,
                format!("{} in '{}'", e, line),
            );
        }

        match parsed.into_entry() {
            Some((date, volume)) => {
                meter_read.append_volume(date, volume);
                stats.records_parsed += 1;
            }
            None => stats.records_skipped += 1,
        }
    }

    fn report(
        &self,
        stats: &mut ParseStats,
        line_number: usize,
        kind: DiagnosticKind,
        error: Error,
    ) {
        self.report_message(stats, line_number, kind, error.to_string());
    }

    /// Log a diagnostic and store it in the statistics
    fn report_message(
        &self,
        stats: &mut ParseStats,
        line_number: usize,
        kind: DiagnosticKind,
        message: String,
    ) {
        let diagnostic = Diagnostic::new(line_number, kind, message);
        if self.config.log_diagnostics {
            warn!("Skipping {}", diagnostic);
        } else {
            debug!("Skipping {}", diagnostic);
        }
        stats.push_diagnostic(diagnostic, self.config.max_diagnostics);
    }
}

/// Split content into lines, dropping blank and whitespace-only lines
pub fn non_blank_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Read a file and return its non-blank lines
fn read_lines(file_path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(file_path).map_err(|e| {
        let message = format!("Failed to read file {}: {}", file_path.display(), e);
        Error::io(message, e)
    })?;

    Ok(non_blank_lines(&content)
        .into_iter()
        .map(str::to_string)
        .collect())
}
