//! Implementation of the `arrow-launcher locate` command.
//!
//! Runs only the binary resolution step, which is handy when a build cannot
//! find the generator and it is unclear which strategy is being used.

use super::host_environment;
use crate::cli::LocateArgs;
use crate::config::Config;
use crate::error::{LauncherError, Result};
use crate::locator::{BinaryLocator, ResolvedBinary};
use crate::process::SystemRunner;

pub fn cmd_locate(args: LocateArgs, config: &Config) -> Result<()> {
    let resolved =
        BinaryLocator::new(config, &SystemRunner).resolve(&args.host_args, &host_environment())?;

    println!("{}", render(&resolved, &config.executable_name, args.json)?);
    Ok(())
}

fn render(resolved: &ResolvedBinary, executable: &str, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(resolved).map_err(|e| {
            LauncherError::UserError(format!("failed to serialize locate result: {}", e))
        });
    }

    Ok(format!(
        "{}: {} (from {})",
        executable, resolved.path, resolved.source
    ))
}
