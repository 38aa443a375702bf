//! Text generation against a hosted completion service.
//!
//! [`TextGenerator`] is the seam between the workflow and the network. The
//! production implementation is [`OpenAiCompletions`]; tests substitute a fake.
//!
//! Exactly one request is made per call. There is no retry and no streaming.

mod openai;

#[cfg(test)]
pub(crate) mod fake;

pub use openai::OpenAiCompletions;

use crate::config::Config;
use crate::credential::Credential;
use crate::prompt::RenderedPrompt;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Why a generation request failed.
///
/// The workflow reports every variant as a generation failure; the variants
/// only sharpen the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("no response within {seconds} seconds")]
    TimedOut { seconds: u64 },

    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not parse service response: {0}")]
    MalformedResponse(String),

    #[error("service response contained no text")]
    EmptyResponse,
}

/// Text returned by the service, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult(String);

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed parameters of every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    /// `None` leaves the ceiling to the service.
    pub max_output_tokens: Option<u32>,
    pub timeout: Duration,
}

impl From<&Config> for GenerationSettings {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.completions_url(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            timeout: config.timeout(),
        }
    }
}

/// Something that turns a prompt into text.
pub trait TextGenerator {
    /// Send the prompt and wait for the complete response.
    fn generate(
        &self,
        prompt: &RenderedPrompt,
        credential: &Credential,
    ) -> Result<GenerationResult, GenerationError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
