//! Check command implementation
//!
//! Parses each file and reports statistics and diagnostics without printing
//! the meter reads themselves.

use super::shared::{
    RunSummary, build_parser, parse_all, print_diagnostics, print_json, setup_logging,
};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::{ParseResult, Result};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Check command runner
pub fn run_check(args: &CheckArgs) -> Result<RunSummary> {
    setup_logging(&args.common)?;

    info!("Checking {} files", args.common.files.len());

    let parser = build_parser(&args.common)?;
    let (results, summary) = parse_all(&parser, &args.common.files)?;

    match args.common.output_format {
        OutputFormat::Json => {
            print_json(&args.common.files, &results, &summary, |file, result| {
                serde_json::json!({ "file": file, "stats": result.stats })
            })?
        }
        OutputFormat::Human => {
            for (file, result) in args.common.files.iter().zip(&results) {
                print_file_stats(file, result);
            }
            summary.print_human();
        }
    }

    Ok(summary)
}

fn print_file_stats(file: &Path, result: &ParseResult) {
    let stats = &result.stats;
    let status = if !stats.envelope_valid {
        "REJECTED".red().bold()
    } else if stats.is_clean() {
        "OK".green().bold()
    } else {
        "WARN".yellow().bold()
    };

    println!("{} {}", status, file.display());
    println!(
        "  lines {}  blocks {} (dropped {})  records {} (skipped {}, orphaned {})  success {:.1}%",
        stats.total_lines,
        stats.blocks_parsed,
        stats.blocks_dropped,
        stats.records_parsed,
        stats.records_skipped,
        stats.orphan_records,
        stats.success_rate()
    );
    print_diagnostics(result);
}
