//! Parse command implementation
//!
//! Parses each file and prints its meter reads.

use super::shared::{
    FileReport, RunSummary, build_parser, parse_all, print_diagnostics, print_json, setup_logging,
};
use crate::Result;
use crate::app::models::MeterRead;
use crate::cli::args::{OutputFormat, ParseArgs};
use colored::Colorize;
use tracing::{debug, info};

/// Parse command runner
pub fn run_parse(args: &ParseArgs) -> Result<RunSummary> {
    setup_logging(&args.common)?;

    info!("Starting parse of {} files", args.common.files.len());
    debug!("Parse arguments: {:?}", args);

    let parser = build_parser(&args.common)?;
    let (results, summary) = parse_all(&parser, &args.common.files)?;

    match args.common.output_format {
        OutputFormat::Json => {
            print_json(&args.common.files, &results, &summary, |file, result| {
                FileReport { file, result }
            })?
        }
        OutputFormat::Human => {
            for (file, result) in args.common.files.iter().zip(&results) {
                println!("{}", file.display().to_string().bold());
                if result.meter_reads.is_empty() {
                    println!("  no meter reads");
                }
                for meter_read in &result.meter_reads {
                    print_meter_read(meter_read, args.show_volumes);
                }
                print_diagnostics(result);
            }
            summary.print_human();
        }
    }

    Ok(summary)
}

/// Print one meter read as a summary line, optionally followed by its volumes
fn print_meter_read(meter_read: &MeterRead, show_volumes: bool) {
    let range = match (meter_read.start_date(), meter_read.end_date()) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        _ => "no volumes".to_string(),
    };

    println!(
        "  {}  {:>3} days  {}  total {} {}",
        meter_read.nmi.cyan(),
        meter_read.volumes.len(),
        range,
        meter_read.total_volume(),
        meter_read.energy_unit
    );

    if show_volumes {
        for (date, volume) in &meter_read.volumes {
            println!("      {}  {:>12}  {}", date, volume.volume, volume.quality);
        }
    }
}
