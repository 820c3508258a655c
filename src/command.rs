//! Generator argument construction.

use crate::request::{GENERATE_COMMAND, IS_PACKAGE_FLAG, PACKAGE_SOURCES_PATH_FLAG};
use std::path::Path;

/// Build the generator argument list.
///
/// The sources path is `sources_path_override` when present and non-empty,
/// otherwise `plugin_work_directory` joined with `sources_segment`.
pub fn build_arguments(
    sources_path_override: Option<&str>,
    plugin_work_directory: &Path,
    sources_segment: &str,
) -> Vec<String> {
    let sources_path = match sources_path_override {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => plugin_work_directory
            .join(sources_segment)
            .to_string_lossy()
            .into_owned(),
    };

    vec![
        GENERATE_COMMAND.to_string(),
        IS_PACKAGE_FLAG.to_string(),
        PACKAGE_SOURCES_PATH_FLAG.to_string(),
        sources_path,
    ]
}
