//! Implementation of the `carcopy generate` command.

use super::input::read_request;
use super::output_error;
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::credential::{SecretInput, TerminalInput};
use crate::error::Result;
use crate::generation::{GenerationSettings, OpenAiCompletions, TextGenerator};
use crate::prompt::{PromptRequest, PromptTemplate};
use crate::workflow::Workflow;
use std::io::Write;

/// Execute the `carcopy generate` command.
///
/// Reads the inputs, runs the workflow against the configured service, and
/// prints the generated text.
pub fn cmd_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let request = read_request(&args.input, std::io::stdin().lock())?;
    let generator = OpenAiCompletions::new(GenerationSettings::from(config))?;
    let terminal = TerminalInput;
    let input: Option<&dyn SecretInput> = if args.no_prompt {
        None
    } else {
        Some(&terminal)
    };

    run_generate(
        &request,
        config,
        &generator,
        input,
        &mut std::io::stdout().lock(),
    )
}

/// Run the workflow and write the result to `out`.
fn run_generate<W: Write>(
    request: &PromptRequest,
    config: &Config,
    generator: &dyn TextGenerator,
    input: Option<&dyn SecretInput>,
    out: &mut W,
) -> Result<()> {
    let workflow = Workflow::new(PromptTemplate::luxury_car(), config);
    let result = workflow.run(request, generator, input)?;

    let text = result.as_str();
    out.write_all(text.as_bytes()).map_err(output_error)?;
    if !text.ends_with('\n') {
        writeln!(out).map_err(output_error)?;
    }
    out.flush().map_err(output_error)
}
