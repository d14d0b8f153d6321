//! Command-line argument definitions for the simple NEM12 tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the simple NEM12 parser
///
/// Reads simplified NEM12 files and reports the meter reads they contain.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "simple-nem12",
    version,
    about = "Parse simplified NEM12 interval meter data files",
    long_about = "Parses simplified NEM12 files (100/200/300/900 records) into per-meter, \
                  date-ordered consumption reads. Malformed records are skipped and reported \
                  as diagnostics; files without a 100/900 envelope produce no reads."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse files and print their meter reads
    Parse(ParseArgs),
    /// Parse files and print only statistics and diagnostics
    Check(CheckArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Simplified NEM12 files to read
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Fail when a file cannot be read or lacks the 100/900 envelope
    ///
    /// By default such files produce no meter reads and processing continues.
    #[arg(long = "strict", help = "Fail on unreadable files or a missing envelope")]
    pub strict: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for parser settings. If not specified, the
    /// SIMPLE_NEM12_CONFIG environment variable is consulted.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print every daily volume, not just a per-meter summary
    #[arg(long = "volumes", help = "Print every daily volume in human output")]
    pub show_volumes: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl CommonArgs {
    /// Get the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Validate arguments before any file is read
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file not found: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}

impl Args {
    /// Get the command, falling back to help when none was given
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}
