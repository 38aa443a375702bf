//! Carcopy: personalized luxury car descriptions.
//!
//! This is the main entry point for the `carcopy` CLI. It loads `.env`, sets
//! up logging, parses arguments, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod catalog;
pub mod config;
pub mod credential;
pub mod error;
pub mod exit_codes;
pub mod generation;
pub mod prompt;
pub mod validate;
pub mod workflow;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so generated text on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "carcopy=debug" } else { "carcopy=warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
