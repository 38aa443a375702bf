//! Collects the customer inputs for a request.

use crate::cli::InputArgs;
use crate::error::{CopyError, Result};
use crate::prompt::PromptRequest;
use std::io::Read;

/// Build a request from CLI arguments.
///
/// Content comes from `--content`, else `--content-file`, else `stdin`. For
/// the file and stdin sources a single trailing line ending is dropped; the
/// text is otherwise kept as-is.
pub fn read_request<R: Read>(args: &InputArgs, stdin: R) -> Result<PromptRequest> {
    let content = match (&args.content, &args.content_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                CopyError::UserError(format!(
                    "failed to read content file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            strip_line_ending(text)
        }
        (None, None) => {
            let text = std::io::read_to_string(stdin).map_err(|e| {
                CopyError::UserError(format!("failed to read content from stdin: {}", e))
            })?;
            strip_line_ending(text)
        }
    };

    Ok(PromptRequest {
        content,
        features: args.features.clone(),
        budget: args.budget,
    })
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
