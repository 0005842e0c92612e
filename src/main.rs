//! tif2pdf CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch
//! conversion, and exit with the appropriate status. For programmatic use,
//! prefer the library API (`tif2pdf::api`).

use clap::Parser;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
