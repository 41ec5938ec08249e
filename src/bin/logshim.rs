//! Emits a single log line from the command line.
//!
//! Usage:
//!   logshim [--config PATH] [--threshold LEVEL] [-f KEY=VALUE]... <LEVEL> <MESSAGE>...

use clap::Parser;
use logshim::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
