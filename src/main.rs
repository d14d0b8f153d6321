use clap::Parser;
use simple_nem12::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help
    let Some(command) = args.get_command() else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands
fn show_help_and_commands() {
    println!("simple-nem12 - Simplified NEM12 Meter Data Reader");
    println!("==================================================");
    println!();
    println!("Reads simplified NEM12 interval meter files (100/200/300/900 records)");
    println!("into per-meter, date-ordered consumption reads.");
    println!();
    println!("USAGE:");
    println!("    simple-nem12 <COMMAND> [OPTIONS] <FILE>...");
    println!();
    println!("COMMANDS:");
    println!("    parse    Parse files and print their meter reads");
    println!("    check    Parse files and print only statistics and diagnostics");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Print the meter reads in a file, with every daily volume:");
    println!("    simple-nem12 parse --volumes meter_data.csv");
    println!();
    println!("    # Check several files, failing on a missing 100/900 envelope:");
    println!("    simple-nem12 check --strict --format json a.csv b.csv");
    println!();
    println!("For more information on a command, run:");
    println!("    simple-nem12 <COMMAND> --help");
}
