//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::SelectionPolicy;
use crate::error::{CopyError, Result};
use std::path::Path;
use std::time::Duration;

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "carcopy.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CopyError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CopyError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `carcopy.yaml` in `dir` is
    /// used when present, otherwise defaults apply.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(candidate)
        } else {
            tracing::debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CopyError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CopyError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `model`, `api_base` and `api_key_env` must be non-empty
    /// - `temperature` must be within 0.0..=2.0
    /// - `max_output_tokens`, when set, must be positive
    /// - `timeout_seconds` and `max_words` must be positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("model", &self.model),
            ("api_base", &self.api_base),
            ("api_key_env", &self.api_key_env),
        ] {
            if value.trim().is_empty() {
                return Err(CopyError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CopyError::UserError(format!(
                "config validation failed: temperature must be between 0.0 and 2.0 (found {})",
                self.temperature
            )));
        }

        if self.max_output_tokens == Some(0) {
            return Err(CopyError::UserError(
                "config validation failed: max_output_tokens must be greater than 0 (use null to omit it)"
                    .to_string(),
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(CopyError::UserError(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.max_words == 0 {
            return Err(CopyError::UserError(
                "config validation failed: max_words must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The selection policy described by `require_features` / `require_budget`.
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            require_features: self.require_features,
            require_budget: self.require_budget,
        }
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// The completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/completions", self.api_base.trim_end_matches('/'))
    }
}
