//! API credential resolution.
//!
//! The environment is checked first. Only when the configured variable is
//! absent or empty does the caller fall back to a secret-masked terminal
//! prompt. The credential is never logged and its buffer is wiped on drop.

use crate::error::{CopyError, Result};
use std::fmt;
use zeroize::Zeroize;

/// Prompt shown when the key has to be typed in.
const INPUT_PROMPT: &str = "OpenAI API Key: ";

/// An opaque API secret.
pub struct Credential(String);

impl Credential {
    /// Wrap a secret, rejecting the empty string.
    pub fn from_input(secret: String) -> Option<Self> {
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Borrow the secret for use in an outgoing request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Outcome of looking for a credential without user interaction.
#[derive(Debug)]
pub enum Resolution {
    /// Found in the environment.
    Resolved(Credential),
    /// Nothing usable in the environment; ask the user.
    NeedsInput,
}

/// Source of interactively entered secrets.
pub trait SecretInput {
    /// Read one secret line without echoing it.
    fn read_secret(&self, prompt: &str) -> std::io::Result<String>;
}

/// Reads from the controlling terminal with echo disabled.
pub struct TerminalInput;

impl SecretInput for TerminalInput {
    fn read_secret(&self, prompt: &str) -> std::io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}

/// Check the process environment for `env_var`.
pub fn resolve_credential(env_var: &str) -> Resolution {
    resolve_with(env_var, |name| std::env::var(name).ok())
}

/// Resolve using an arbitrary variable lookup.
pub fn resolve_with<F>(env_var: &str, lookup: F) -> Resolution
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(env_var).and_then(Credential::from_input) {
        Some(credential) => {
            tracing::debug!(env_var, "credential taken from environment");
            Resolution::Resolved(credential)
        }
        None => Resolution::NeedsInput,
    }
}

/// Resolve a credential, falling back to `input` when the environment has none.
///
/// Passing `None` for `input` disables the interactive fallback.
pub fn obtain_credential(env_var: &str, input: Option<&dyn SecretInput>) -> Result<Credential> {
    complete_resolution(resolve_credential(env_var), env_var, input)
}

/// Turn a [`Resolution`] into a credential, prompting if needed.
pub fn complete_resolution(
    resolution: Resolution,
    env_var: &str,
    input: Option<&dyn SecretInput>,
) -> Result<Credential> {
    let missing = || CopyError::MissingCredential {
        env_var: env_var.to_string(),
        interactive: input.is_some(),
    };

    match resolution {
        Resolution::Resolved(credential) => Ok(credential),
        Resolution::NeedsInput => {
            let Some(input) = input else {
                return Err(missing());
            };
            tracing::debug!(env_var, "credential not in environment, prompting");
            match input.read_secret(INPUT_PROMPT) {
                Ok(secret) => Credential::from_input(secret).ok_or_else(missing),
                Err(e) => {
                    tracing::warn!(error = %e, "could not read credential from terminal");
                    Err(missing())
                }
            }
        }
    }
}
