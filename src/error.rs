//! Error types for the arrow-launcher CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// Main error type for launcher operations.
///
/// Every variant is terminal for the invocation and maps to its own exit code.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// None of the resolution strategies produced a generator path.
    #[error(
        "{executable} binary not found!\n\n\
         Please install the {executable} binary somewhere on PATH, for example:\n  \
         cd /path/to/arrow-generator && make build && sudo cp bin/{executable} /usr/local/bin/\n\n\
         Or set the {env_variable} environment variable to point to the {executable} binary.\n\n\
         Or pass {flag} <path> with the location of the {executable} binary."
    )]
    BinaryNotFound {
        executable: String,
        env_variable: String,
        flag: String,
    },

    /// The resolved path could not be started as a process.
    #[error("failed to launch '{path}': {source}")]
    LaunchFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The generator ran and exited with a non-zero status.
    ///
    /// The generator's stderr is relayed by the reporter just before this is
    /// returned, so the message does not repeat it.
    #[error("Failed to generate dependencies for {package_name} (exit code: {exit_code})")]
    GenerationFailed { package_name: String, exit_code: i32 },
}

impl LauncherError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::UserError(_) => exit_codes::USER_ERROR,
            LauncherError::BinaryNotFound { .. } => exit_codes::BINARY_NOT_FOUND,
            LauncherError::LaunchFailure { .. } => exit_codes::LAUNCH_FAILURE,
            LauncherError::GenerationFailed { .. } => exit_codes::GENERATION_FAILED,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
