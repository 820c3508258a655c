//! Generator binary resolution.
//!
//! The generator path is resolved by trying a fixed, ordered list of
//! strategies:
//!
//! 1. An explicit `--arrow-path <path>` argument
//! 2. The `ARROW_PATH` environment variable (name configurable)
//! 3. A PATH lookup (`which arrow`, `where arrow` on Windows)
//!
//! The first strategy that yields a non-empty path wins; later strategies are
//! not attempted. If none succeeds the result is `BinaryNotFound`.

use crate::config::Config;
use crate::error::{LauncherError, Result};
use crate::process::CommandRunner;
use crate::request::{ARROW_PATH_FLAG, flag_value};
use serde::Serialize;
use std::collections::BTreeMap;

/// Which strategy produced the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinarySource {
    Argument,
    EnvironmentVariable,
    SystemPath,
}

impl std::fmt::Display for BinarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinarySource::Argument => write!(f, "argument"),
            BinarySource::EnvironmentVariable => write!(f, "environment variable"),
            BinarySource::SystemPath => write!(f, "system path"),
        }
    }
}

/// A located generator binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBinary {
    /// Path to the executable; never empty.
    pub path: String,
    /// Strategy that produced `path`.
    pub source: BinarySource,
}

/// Resolution strategies in priority order.
const STRATEGIES: [BinarySource; 3] = [
    BinarySource::Argument,
    BinarySource::EnvironmentVariable,
    BinarySource::SystemPath,
];

/// Resolves the generator binary for one invocation.
pub struct BinaryLocator<'a, R: CommandRunner> {
    config: &'a Config,
    runner: &'a R,
}

impl<'a, R: CommandRunner> BinaryLocator<'a, R> {
    pub fn new(config: &'a Config, runner: &'a R) -> Self {
        Self { config, runner }
    }

    /// Resolve the generator path from arguments, environment, and PATH.
    pub fn resolve(
        &self,
        raw_arguments: &[String],
        environment: &BTreeMap<String, String>,
    ) -> Result<ResolvedBinary> {
        STRATEGIES
            .iter()
            .find_map(|&source| {
                let path = self.try_strategy(source, raw_arguments, environment)?;
                tracing::debug!(%source, %path, "generator binary resolved");
                Some(ResolvedBinary { path, source })
            })
            .ok_or_else(|| LauncherError::BinaryNotFound {
                executable: self.config.executable_name.clone(),
                env_variable: self.config.path_env_variable.clone(),
                flag: ARROW_PATH_FLAG.to_string(),
            })
    }

    fn try_strategy(
        &self,
        source: BinarySource,
        raw_arguments: &[String],
        environment: &BTreeMap<String, String>,
    ) -> Option<String> {
        tracing::trace!(%source, "trying resolution strategy");
        match source {
            BinarySource::Argument => flag_value(raw_arguments, ARROW_PATH_FLAG).map(str::to_string),
            BinarySource::EnvironmentVariable => environment
                .get(&self.config.path_env_variable)
                .filter(|value| !value.is_empty())
                .cloned(),
            BinarySource::SystemPath => self.lookup_on_path(),
        }
    }

    /// Ask the system lookup tool for the executable.
    ///
    /// A missing tool, a non-zero exit and empty output all mean "not found".
    fn lookup_on_path(&self) -> Option<String> {
        let args = [self.config.executable_name.clone()];
        let outcome = match self.runner.run(&self.config.lookup_tool, &args) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(tool = %self.config.lookup_tool, error = %e, "lookup tool unavailable");
                return None;
            }
        };

        if !outcome.is_success() {
            tracing::debug!(exit_code = outcome.exit_code, "lookup found nothing");
            return None;
        }

        // `where` lists every match, one per line; the first is what would run.
        outcome
            .stdout
            .trim()
            .lines()
            .next()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string)
    }
}
