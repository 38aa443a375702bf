//! Error types for the carcopy CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::generation::GenerationError;
use crate::prompt::TemplateError;
use thiserror::Error;

/// Main error type for carcopy operations.
///
/// Each variant maps to a specific exit code. None of them is fatal to the
/// caller: the user can correct inputs and run the command again.
#[derive(Error, Debug)]
pub enum CopyError {
    /// User provided invalid arguments, an unreadable file, or bad configuration.
    #[error("{0}")]
    UserError(String),

    /// Inputs were rejected before any request was issued.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// No credential in the environment and none supplied interactively.
    #[error("credential missing: set {env_var}{}", prompt_hint(.interactive))]
    MissingCredential {
        /// Name of the environment variable that was checked.
        env_var: String,
        /// Whether the user was offered a prompt to enter the key.
        interactive: bool,
    },

    /// The prompt template could not be rendered.
    #[error("Prompt template error: {0}")]
    Template(#[from] TemplateError),

    /// The text-generation service call failed.
    #[error("Generation failed: {0}")]
    GenerationFailure(#[from] GenerationError),
}

impl CopyError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CopyError::UserError(_) => exit_codes::USER_ERROR,
            CopyError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            CopyError::Template(_) => exit_codes::USER_ERROR,
            CopyError::MissingCredential { .. } => exit_codes::MISSING_CREDENTIAL,
            CopyError::GenerationFailure(_) => exit_codes::GENERATION_FAILURE,
        }
    }
}

fn prompt_hint(interactive: &bool) -> &'static str {
    if *interactive {
        " or enter an API key when prompted"
    } else {
        ""
    }
}

/// Result type alias for carcopy operations.
pub type Result<T> = std::result::Result<T, CopyError>;
