//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for carcopy.
///
/// This struct represents the contents of `carcopy.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Generation settings
    // =========================================================================
    /// Completion model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Ceiling on generated tokens. `null` omits the ceiling from the request
    /// and leaves the service default in effect.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: Option<u32>,

    /// Base URL of the OpenAI-compatible API (without `/completions`).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Environment variable checked for the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Seconds to wait for the service before giving up.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    // =========================================================================
    // Validation settings
    // =========================================================================
    /// Maximum number of space-delimited words accepted in the content.
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Reject requests with no preferred features.
    #[serde(default)]
    pub require_features: bool,

    /// Reject requests with no budget bracket.
    #[serde(default)]
    pub require_budget: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout_seconds(),
            max_words: default_max_words(),
            require_features: false,
            require_budget: false,
        }
    }
}
