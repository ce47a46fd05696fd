//! crossdc - Inspect producer configuration resolution
//!
//! Resolves the crossdc producer configuration against a staged
//! coordination namespace (a directory tree) and prints the result.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    crossdc_core::logging::init();
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
