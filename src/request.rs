//! Invocation request handed over by the build harness.
//!
//! A request captures everything one launcher run may look at: the raw
//! arguments forwarded by the host, a snapshot of the environment, and the
//! host-supplied package context. It is built once and never mutated.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Flag naming an explicit generator binary path.
pub const ARROW_PATH_FLAG: &str = "--arrow-path";

/// Flag naming the directory the generator writes sources into.
pub const PACKAGE_SOURCES_PATH_FLAG: &str = "--package-sources-path";

/// Generator subcommand.
pub const GENERATE_COMMAND: &str = "generate";

/// Flag telling the generator it is running for a package.
pub const IS_PACKAGE_FLAG: &str = "--is-package";

/// Everything a single launcher run needs from its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Arguments forwarded verbatim from the host.
    pub raw_arguments: Vec<String>,
    /// Environment the host exposed to the launcher.
    pub environment: BTreeMap<String, String>,
    /// Value of [`PACKAGE_SOURCES_PATH_FLAG`] if present in the raw arguments.
    pub sources_path_override: Option<String>,
    /// Host-designated base directory for the default sources path.
    pub plugin_work_directory: PathBuf,
    /// Display name of the package, used only in messages.
    pub package_name: String,
}

impl InvocationRequest {
    /// Build a request, extracting the sources path override from `raw_arguments`.
    pub fn new<I, K, V>(
        raw_arguments: Vec<String>,
        environment: I,
        plugin_work_directory: impl Into<PathBuf>,
        package_name: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let sources_path_override =
            flag_value(&raw_arguments, PACKAGE_SOURCES_PATH_FLAG).map(str::to_string);

        Self {
            raw_arguments,
            environment: environment
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            sources_path_override,
            plugin_work_directory: plugin_work_directory.into(),
            package_name: package_name.into(),
        }
    }
}

/// Value following the first occurrence of `flag`, if that value is non-empty.
///
/// Only the first occurrence counts: a later repetition is not consulted
/// even when the first one has no usable value.
pub fn flag_value<'a>(arguments: &'a [String], flag: &str) -> Option<&'a str> {
    let index = arguments.iter().position(|arg| arg == flag)?;
    arguments
        .get(index + 1)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
