//! Command implementations for arrow-launcher.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the host-environment plumbing they share.

mod generate;
mod locate;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{LauncherError, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args, config),
        Command::Locate(args) => locate::cmd_locate(args, config),
    }
}

/// Snapshot of the process environment.
///
/// Entries that are not valid UTF-8 are skipped; none of the variables the
/// launcher reads can use them.
fn host_environment() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        LauncherError::UserError(format!("failed to get current working directory: {}", e))
    })
}
