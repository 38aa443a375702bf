//! The generation workflow.
//!
//! One user action runs through these stages in order:
//!
//! ```text
//! Validating -> CredentialPending -> Rendering -> Calling -> Succeeded
//!      |               |                              |
//!   Rejected    MissingCredential                   Failed
//! ```
//!
//! Every terminal state returns control to the caller. Nothing is kept
//! between runs: the credential, prompt and result are dropped when `run`
//! returns.

use crate::config::{Config, SelectionPolicy};
use crate::credential::{SecretInput, obtain_credential};
use crate::error::Result;
use crate::generation::{GenerationResult, TextGenerator};
use crate::prompt::{PromptRequest, PromptTemplate, RenderedPrompt};
use crate::validate::validate_request;
use std::fmt;

/// Workflow stage, used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    CredentialPending,
    Rendering,
    Calling,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::CredentialPending => "credential_pending",
            Stage::Rendering => "rendering",
            Stage::Calling => "calling",
        };
        f.write_str(name)
    }
}

/// Validates, renders and submits generation requests.
#[derive(Debug, Clone)]
pub struct Workflow {
    template: PromptTemplate,
    max_words: usize,
    policy: SelectionPolicy,
    api_key_env: String,
}

impl Workflow {
    /// Build a workflow from configuration.
    pub fn new(template: PromptTemplate, config: &Config) -> Self {
        Self {
            template,
            max_words: config.max_words,
            policy: config.selection_policy(),
            api_key_env: config.api_key_env.clone(),
        }
    }

    /// Validate and render without contacting the service.
    pub fn prepare(&self, request: &PromptRequest) -> Result<RenderedPrompt> {
        tracing::debug!(stage = %Stage::Validating, "workflow stage");
        validate_request(request, self.max_words, self.policy)?;

        tracing::debug!(stage = %Stage::Rendering, "workflow stage");
        Ok(self.template.render(request)?)
    }

    /// Run the full workflow and return the generated text.
    ///
    /// `input` is the interactive fallback for the credential; `None` means
    /// the environment is the only source.
    pub fn run(
        &self,
        request: &PromptRequest,
        generator: &dyn TextGenerator,
        input: Option<&dyn SecretInput>,
    ) -> Result<GenerationResult> {
        tracing::debug!(stage = %Stage::Validating, "workflow stage");
        validate_request(request, self.max_words, self.policy)?;

        tracing::debug!(stage = %Stage::CredentialPending, "workflow stage");
        let credential = obtain_credential(&self.api_key_env, input)?;

        tracing::debug!(stage = %Stage::Rendering, "workflow stage");
        let prompt = self.template.render(request)?;

        tracing::debug!(
            stage = %Stage::Calling,
            model = generator.model_name(),
            prompt_bytes = prompt.as_str().len(),
            "workflow stage"
        );
        let result = generator
            .generate(&prompt, &credential)
            .inspect_err(|e| tracing::debug!(error = %e, "generation failed"))?;

        tracing::debug!(result_bytes = result.as_str().len(), "generation succeeded");
        Ok(result)
    }
}
