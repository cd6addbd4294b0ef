//! Weave - Entry Point
//!
//! Binary entry point for the Weave CLI. Lives in the `weave` facade crate so
//! the demo registrations in `weave::demo` are linked in.

use std::error::Error as _;
use std::process::ExitCode;

use clap::Parser;
use weave::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
