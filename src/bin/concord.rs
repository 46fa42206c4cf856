//! Concord CLI binary.

use std::process;

use clap::Parser;
use concord::cli::args::ConcordArgs;
use concord::cli::commands::execute_command;

fn main() {
    let args = ConcordArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
