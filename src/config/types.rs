//! Configuration types and defaults for carcopy.
//!
//! This module defines the selection policy and the default value functions
//! used by the Config struct.

/// Which selections a request must carry before it is sent.
///
/// Both flags default to `false`, which accepts an empty feature list and a
/// missing budget bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionPolicy {
    /// Reject requests with no preferred features.
    pub require_features: bool,
    /// Reject requests with no budget bracket.
    pub require_budget: bool,
}

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Default API base URL (OpenAI-compatible).
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default maximum number of space-delimited words in the content.
pub const DEFAULT_MAX_WORDS: usize = 700;

// Default value functions for serde
pub(crate) fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
pub(crate) fn default_temperature() -> f32 {
    0.7
}
pub(crate) fn default_max_output_tokens() -> Option<u32> {
    Some(1024)
}
pub(crate) fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}
pub(crate) fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}
pub(crate) fn default_timeout_seconds() -> u64 {
    60
}
pub(crate) fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}
