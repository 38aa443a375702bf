//! Input validation for generation requests.
//!
//! Runs before any credential lookup or network traffic:
//! - Content ceiling: space-delimited word count must not exceed the limit
//! - Selection policy: optionally require a feature and/or a budget

use crate::config::SelectionPolicy;
use crate::error::{CopyError, Result};
use crate::prompt::PromptRequest;

/// Reason given when the content exceeds the word ceiling.
pub const CONTENT_TOO_LONG: &str = "content too long";

/// Count words the way the ceiling is defined: tokens between single spaces.
///
/// This is deliberately not a real tokenizer. Consecutive spaces yield empty
/// tokens, newlines and tabs do not separate, and the empty string counts as
/// one token.
pub fn word_count(content: &str) -> usize {
    content.split(' ').count()
}

/// Reject content whose word count exceeds `max_words`.
pub fn validate_content(content: &str, max_words: usize) -> Result<()> {
    let count = word_count(content);
    tracing::debug!(words = count, max_words, "checked content length");

    if count > max_words {
        return Err(CopyError::ValidationError(format!(
            "{} ({} words, limit is {})",
            CONTENT_TOO_LONG, count, max_words
        )));
    }
    Ok(())
}

/// Validate a full request: content ceiling first, then the selection policy.
pub fn validate_request(
    request: &PromptRequest,
    max_words: usize,
    policy: SelectionPolicy,
) -> Result<()> {
    validate_content(&request.content, max_words)?;

    if policy.require_features && request.features.is_empty() {
        return Err(CopyError::ValidationError(
            "no preferred features selected".to_string(),
        ));
    }

    if policy.require_budget && request.budget.is_none() {
        return Err(CopyError::ValidationError(
            "no budget bracket selected".to_string(),
        ));
    }

    Ok(())
}
