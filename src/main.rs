//! Arrow launcher: runs the arrow dependency-injection generator from a build.
//!
//! This is the main entry point for the `arrow-launcher` CLI. It parses
//! arguments, sets up logging and configuration, dispatches to the command
//! handler, and turns errors into exit codes.

mod cli;
mod commands;
pub mod command;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod launcher;
pub mod locator;
pub mod logging;
pub mod process;
pub mod report;
pub mod request;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: {}", err);
    }

    let result = Config::load_or_default(cli.config.as_deref())
        .and_then(|config| commands::dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
