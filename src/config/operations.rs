//! Config loading and validation.

use super::model::Config;
use crate::error::{LauncherError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LauncherError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LauncherError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config at `path` if one was given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LauncherError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every field must be non-empty
    /// - `executable_name` and `sources_segment` must not contain path separators
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("executable_name", &self.executable_name),
            ("path_env_variable", &self.path_env_variable),
            ("lookup_tool", &self.lookup_tool),
            ("sources_segment", &self.sources_segment),
            ("generated_file_name", &self.generated_file_name),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(LauncherError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        for (name, value) in [
            ("executable_name", &self.executable_name),
            ("sources_segment", &self.sources_segment),
        ] {
            if value.contains(['/', '\\']) {
                return Err(LauncherError::UserError(format!(
                    "config validation failed: {} must be a single name without path separators (found '{}')",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
