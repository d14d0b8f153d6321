//! Shared utilities for CLI commands
//!
//! Logging setup, parser construction and run summaries used by every
//! command.

use crate::cli::args::CommonArgs;
use crate::{Nem12Parser, ParseResult, ParserConfig, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Totals across every file handled by one command
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Number of files handled
    pub files_processed: usize,

    /// Files rejected as a whole (unreadable or missing envelope)
    pub files_rejected: usize,

    /// Meter reads emitted across all files
    pub meter_reads: usize,

    /// Date records stored
    pub records_parsed: usize,

    /// Diagnostics raised, stored or not
    pub diagnostics: usize,

    /// Wall-clock time for the run
    #[serde(skip)]
    pub processing_time: Duration,
}

impl RunSummary {
    /// Fold one file's result into the totals
    pub fn add(&mut self, result: &ParseResult) {
        self.files_processed += 1;
        if !result.stats.envelope_valid {
            self.files_rejected += 1;
        }
        self.meter_reads += result.meter_reads.len();
        self.records_parsed += result.stats.records_parsed;
        self.diagnostics += result.stats.diagnostic_count();
    }

    /// Print a one-paragraph human summary to stdout
    pub fn print_human(&self) {
        println!();
        println!("{}", "Summary".bold());
        println!("  Files processed: {}", self.files_processed);
        if self.files_rejected > 0 {
            println!(
                "  Files rejected:  {}",
                self.files_rejected.to_string().red()
            );
        } else {
            println!("  Files rejected:  0");
        }
        println!("  Meter reads:     {}", self.meter_reads);
        println!("  Records parsed:  {}", self.records_parsed);
        if self.diagnostics > 0 {
            println!("  Lines skipped:   {}", self.diagnostics.to_string().yellow());
        } else {
            println!("  Lines skipped:   0");
        }
        println!("  Time:            {:.2}s", self.processing_time.as_secs_f64());
    }
}

/// One file's result, as emitted in JSON output
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub file: &'a Path,
    #[serde(flatten)]
    pub result: &'a ParseResult,
}

/// Set up structured logging for any command
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("simple_nem12={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build a parser from the config file and command-line overrides
pub fn build_parser(args: &CommonArgs) -> Result<Nem12Parser> {
    args.validate()?;

    let mut config = ParserConfig::load(args.config_file.as_deref())?;
    if args.strict {
        config = config.with_strict_envelope();
    }
    debug!("Parser configuration: {:?}", config);

    Ok(Nem12Parser::with_config(config))
}

/// Parse every file in order, stopping at the first strict-mode failure
pub fn parse_all(
    parser: &Nem12Parser,
    files: &[PathBuf],
) -> Result<(Vec<ParseResult>, RunSummary)> {
    let start_time = Instant::now();
    let mut summary = RunSummary::default();
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        let result = parser.process_file(file)?;
        summary.add(&result);
        results.push(result);
    }

    summary.processing_time = start_time.elapsed();
    info!(
        "Processed {} files in {:.2}s: {} meter reads",
        summary.files_processed,
        summary.processing_time.as_secs_f64(),
        summary.meter_reads
    );

    Ok((results, summary))
}

/// Print one report per file, plus the run summary, as pretty JSON to stdout
pub fn print_json<'a, T, F>(
    files: &'a [PathBuf],
    results: &'a [ParseResult],
    summary: &RunSummary,
    report: F,
) -> Result<()>
where
    T: Serialize,
    F: Fn(&'a Path, &'a ParseResult) -> T,
{
    let reports: Vec<T> = files
        .iter()
        .zip(results)
        .map(|(file, result)| report(file.as_path(), result))
        .collect();

    let output = serde_json::json!({
        "files": reports,
        "summary": summary,
    });
    let text = serde_json::to_string_pretty(&output)?;
    println!("{}", text);
    Ok(())
}

/// Print the diagnostics of one file
pub fn print_diagnostics(result: &ParseResult) {
    for diagnostic in &result.stats.diagnostics {
        if diagnostic.kind.is_fatal() {
            println!("  {} {}", "error:".red().bold(), diagnostic);
        } else {
            println!("  {} {}", "skipped:".yellow(), diagnostic);
        }
    }
    if result.stats.diagnostics_dropped > 0 {
        println!(
            "  ... and {} more diagnostics",
            result.stats.diagnostics_dropped
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accumulates() {
        let parser = Nem12Parser::new();
        let mut summary = RunSummary::default();

        summary.add(&parser.parse_lines(&["100", "200,1234567890", "300,20200101,1,A", "900"]));
        summary.add(&parser.parse_lines(&["100", "200,1234567890"]));

        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.files_rejected, 1);
        assert_eq!(summary.meter_reads, 1);
        assert_eq!(summary.records_parsed, 1);
        assert_eq!(summary.diagnostics, 1);
    }

    #[test]
    fn test_print_json_accepts_any_report() {
        let files = vec![PathBuf::from("a.csv")];
        let results = vec![Nem12Parser::new().parse_lines(&["100", "900"])];
        let summary = RunSummary::default();

        let reports = print_json(&files, &results, &summary, |file, result| FileReport {
            file,
            result,
        });
        assert!(reports.is_ok());
        assert!(print_json(&files, &results, &summary, |_, result| &result.stats).is_ok());
    }

    #[test]
    fn test_file_report_serializes_flat() {
        let result = Nem12Parser::new().parse_lines(&["100", "200,1234567890", "900"]);
        let report = FileReport {
            file: Path::new("a.csv"),
            result: &result,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["file"], "a.csv");
        assert_eq!(json["meter_reads"][0]["nmi"], "1234567890");
        assert_eq!(json["stats"]["blocks_parsed"], 1);
    }
}
