//! Implementation of the `carcopy prompt` command.
//!
//! Shows exactly what would be sent, without a credential or network access.

use super::input::read_request;
use super::output_error;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::PromptTemplate;
use crate::workflow::Workflow;
use std::io::Write;

/// Execute the `carcopy prompt` command.
pub fn cmd_prompt(args: InputArgs, config: &Config) -> Result<()> {
    let request = read_request(&args, std::io::stdin().lock())?;
    let workflow = Workflow::new(PromptTemplate::luxury_car(), config);
    let prompt = workflow.prepare(&request)?;

    let mut out = std::io::stdout().lock();
    out.write_all(prompt.as_str().as_bytes())
        .and_then(|_| out.flush())
        .map_err(output_error)
}
