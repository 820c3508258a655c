//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Configuration for the launcher.
///
/// Every field has a default matching the generator's own constants, so an
/// empty file (or no file at all) yields a working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the generator executable searched for on PATH.
    #[serde(default = "default_executable_name")]
    pub executable_name: String,

    /// Environment variable holding an explicit generator path.
    #[serde(default = "default_path_env_variable")]
    pub path_env_variable: String,

    /// Tool used for the PATH lookup (`which` on unix, `where` on Windows).
    #[serde(default = "default_lookup_tool")]
    pub lookup_tool: String,

    /// Directory segment appended to the plugin work directory when no
    /// sources path override is given.
    #[serde(default = "default_sources_segment")]
    pub sources_segment: String,

    /// File name the generator writes; only used in the success message.
    #[serde(default = "default_generated_file_name")]
    pub generated_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable_name: default_executable_name(),
            path_env_variable: default_path_env_variable(),
            lookup_tool: default_lookup_tool(),
            sources_segment: default_sources_segment(),
            generated_file_name: default_generated_file_name(),
        }
    }
}

pub(crate) fn default_executable_name() -> String {
    "arrow".to_string()
}

pub(crate) fn default_path_env_variable() -> String {
    "ARROW_PATH".to_string()
}

#[cfg(windows)]
pub(crate) fn default_lookup_tool() -> String {
    "where".to_string()
}

#[cfg(not(windows))]
pub(crate) fn default_lookup_tool() -> String {
    "which".to_string()
}

pub(crate) fn default_sources_segment() -> String {
    "Sources".to_string()
}

pub(crate) fn default_generated_file_name() -> String {
    "dependencies.generated.swift".to_string()
}
