//! Implementation of the `carcopy options` command.

use super::output_error;
use crate::catalog::{BudgetBracket, Feature};
use crate::error::Result;
use std::io::Write;

/// Execute the `carcopy options` command.
pub fn cmd_options() -> Result<()> {
    write_options(&mut std::io::stdout().lock())
}

fn write_options<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Preferred features (-f/--feature, repeatable):").map_err(output_error)?;
    for feature in Feature::ALL {
        writeln!(out, "  {}", feature).map_err(output_error)?;
    }
    writeln!(out).map_err(output_error)?;
    writeln!(out, "Budget brackets (-b/--budget, pick one):").map_err(output_error)?;
    for bracket in BudgetBracket::ALL {
        writeln!(out, "  {}", bracket).map_err(output_error)?;
    }
    Ok(())
}
