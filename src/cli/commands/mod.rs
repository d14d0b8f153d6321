//! Command implementations for the simple NEM12 CLI
//!
//! Each command is implemented in its own module; shared logging, parser
//! construction and reporting live in `shared`.

pub mod check;
pub mod parse;
pub mod shared;

pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner
///
/// Dispatches to the handler for the given subcommand:
/// - `parse`: print meter reads for each file
/// - `check`: print statistics and diagnostics for each file
pub fn run(command: &Commands) -> Result<RunSummary> {
    match command {
        Commands::Parse(parse_args) => parse::run_parse(parse_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
