//! CLI argument parsing for arrow-launcher.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arrow launcher: run the arrow dependency-injection generator from a build.
///
/// The generator binary is located through, in order:
/// - an explicit `--arrow-path <path>` host argument
/// - the ARROW_PATH environment variable
/// - a PATH lookup for `arrow`
#[derive(Parser, Debug)]
#[command(name = "arrow-launcher")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML file overriding executable, variable, and directory names.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit debug diagnostics on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for arrow-launcher.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the dependency container for a package.
    ///
    /// Locates the generator, runs `generate --is-package` against the
    /// package sources path, and relays its output.
    Generate(GenerateArgs),

    /// Print which generator binary would be used, and why.
    Locate(LocateArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Package display name used in status messages.
    ///
    /// Defaults to the final component of the work directory.
    #[arg(long)]
    pub package_name: Option<String>,

    /// Plugin work directory; the default sources path is `<DIR>/Sources`.
    ///
    /// Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Arguments forwarded by the host (after `--`), e.g.
    /// `--arrow-path <path>` or `--package-sources-path <path>`.
    #[arg(last = true, value_name = "HOST_ARGS")]
    pub host_args: Vec<String>,
}

/// Arguments for the `locate` command.
#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Arguments forwarded by the host (after `--`).
    #[arg(last = true, value_name = "HOST_ARGS")]
    pub host_args: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
