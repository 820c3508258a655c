//! Implementation of the `arrow-launcher generate` command.

use super::{current_dir, host_environment};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::launcher::run_generation;
use crate::process::SystemRunner;
use crate::request::InvocationRequest;
use std::path::Path;

/// Name used when the work directory has no final component (e.g. `/`).
const FALLBACK_PACKAGE_NAME: &str = "package";

/// Run the generator for the package described by `args`.
pub fn cmd_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let work_dir = match args.work_dir {
        Some(dir) => dir,
        None => current_dir()?,
    };
    let package_name = args
        .package_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| default_package_name(&work_dir));

    let request = InvocationRequest::new(args.host_args, host_environment(), work_dir, package_name);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_generation(
        &request,
        config,
        &SystemRunner,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

fn default_package_name(work_dir: &Path) -> String {
    work_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_PACKAGE_NAME.to_string())
}
