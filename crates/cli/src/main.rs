//! envconf - command-line access to sectioned config files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging.
//! - Run the selected command and map failures to exit codes.
//!
//! Does NOT handle:
//! - Parsing, precedence, or persistence (see the `envconf` crate).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
