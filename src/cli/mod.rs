//! CLI argument parsing for carcopy.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::catalog::{BudgetBracket, Feature};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Carcopy: personalized luxury car descriptions.
///
/// Turns a neutral car model description plus a customer's preferred
/// features and budget into tailored sales copy using a hosted
/// text-generation service.
#[derive(Parser, Debug)]
#[command(name = "carcopy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: ./carcopy.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for carcopy.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a personalized description.
    ///
    /// Validates the inputs, resolves the API key (environment first, then a
    /// masked prompt), and prints the generated text.
    Generate(GenerateArgs),

    /// Print the rendered prompt without calling the service.
    Prompt(InputArgs),

    /// List the accepted feature labels and budget brackets.
    Options,

    /// Write a default carcopy.yaml in the current directory (or at --config).
    Init(InitArgs),
}

/// Customer inputs shared by `generate` and `prompt`.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Preferred feature (repeatable or comma-separated).
    #[arg(
        short = 'f',
        long = "feature",
        value_delimiter = ',',
        value_parser = Feature::parse_arg
    )]
    pub features: Vec<Feature>,

    /// Budget bracket, e.g. "100k-200k €" or 100k-200k.
    #[arg(short, long, value_parser = BudgetBracket::parse_arg)]
    pub budget: Option<BudgetBracket>,

    /// Car model description. Read from stdin when neither this nor
    /// --content-file is given.
    #[arg(short, long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the car model description from a file.
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Never prompt for the API key; fail if it is not in the environment.
    #[arg(long)]
    pub no_prompt: bool,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
