//! Command implementations for carcopy.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod generate;
mod init;
mod input;
mod options;
mod prompt;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{CopyError, Result};
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => {
            let config = load_config(cli.config.as_deref())?;
            generate::cmd_generate(args, &config)
        }
        Command::Prompt(args) => {
            let config = load_config(cli.config.as_deref())?;
            prompt::cmd_prompt(args, &config)
        }
        Command::Options => options::cmd_options(),
        Command::Init(args) => init::cmd_init(args, cli.config.as_deref()),
    }
}

/// Resolve config relative to the current directory.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().map_err(|e| {
        CopyError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    Config::resolve(explicit, &cwd)
}

/// Map a stdout write failure to a user error.
fn output_error(e: std::io::Error) -> CopyError {
    CopyError::UserError(format!("failed to write output: {}", e))
}
