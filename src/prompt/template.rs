//! Template engine for variable substitution.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Substituted values are inserted as-is and never re-scanned, so braces in
//! user content cannot reference other variables.
//!
//! Undefined variables are an error rather than an empty substitution.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// The position in the template where the variable was found.
        position: usize,
    },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName {
        /// The position of the empty variable.
        position: usize,
    },
}

/// Render a template string by substituting variables.
///
/// # Returns
///
/// * `Ok(String)` - The rendered string with all variables substituted
/// * `Err(TemplateError)` - If a variable is undefined or syntax is invalid
pub fn render_template(
    template: &str,
    variables: &HashMap<&str, &str>,
) -> Result<String, TemplateError> {
    let extra: usize = variables.values().map(|v| v.len()).sum();
    let mut result = String::with_capacity(template.len() + extra);
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut var_name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => var_name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let var_name = var_name.trim();
                if var_name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                match variables.get(var_name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: var_name.to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is literal.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
