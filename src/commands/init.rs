//! Implementation of the `carcopy init` command.
//!
//! Writes a default `carcopy.yaml` so the generation settings and selection
//! policy can be edited in one place.

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{CopyError, Result};
use std::path::{Path, PathBuf};

/// Execute the `carcopy init` command.
///
/// Writes to `explicit` when `--config` was given, otherwise to
/// `./carcopy.yaml`.
pub fn cmd_init(args: InitArgs, explicit: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        CopyError::UserError(format!("failed to determine current directory: {}", e))
    })?;

    let path = init_target(explicit, &cwd);
    write_default_config(&path, args.force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Where `init` writes: the explicit path, or the default file name in `dir`.
fn init_target(explicit: Option<&Path>, dir: &Path) -> PathBuf {
    match explicit {
        Some(path) => dir.join(path),
        None => dir.join(CONFIG_FILE_NAME),
    }
}

/// Write the default config to `path`, refusing to overwrite unless `force`.
fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CopyError::UserError(format!(
            "'{}' already exists. Use `carcopy init --force` to overwrite it.",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(path, yaml).map_err(|e| {
        CopyError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}
