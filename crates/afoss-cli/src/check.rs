//! # Check Subcommand
//!
//! Validate every project and verify that the generated catalog and the
//! README listing on disk match what `build` would produce. Writes nothing.
//! Intended for CI, the same way `lock --check` verifies a lockfile.

use anyhow::{Context, Result};
use clap::Args;

use afoss_core::CatalogLayout;
use afoss_readme::{readme_is_current, ReadmeError};

use crate::report::Console;
use crate::validate::{validate_projects, Validation};

/// Arguments for `afoss check`.
#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Only validate records; do not compare generated artifacts.
    #[arg(long)]
    pub records_only: bool,
}

/// Execute the check.
///
/// Returns exit code: 0 when everything is valid and current, 1 otherwise.
pub fn run_check(args: &CheckArgs, layout: &CatalogLayout, console: &mut Console<'_>) -> Result<u8> {
    let Validation::Passed(catalog) = validate_projects(layout, console)? else {
        return Ok(1);
    };
    if args.records_only {
        return Ok(0);
    }

    let mut stale = false;

    let output = layout.relative(&layout.output);
    if catalog
        .is_current(&layout.output)
        .context("failed to compare project catalog")?
    {
        console.up_to_date(output)?;
    } else {
        console.stale(output)?;
        stale = true;
    }

    let readme = layout.relative(&layout.readme);
    match readme_is_current(&layout.readme, &layout.markers, catalog.records()) {
        Ok(true) => console.up_to_date(readme)?,
        Ok(false) => {
            console.stale(readme)?;
            stale = true;
        }
        Err(ReadmeError::NotFound { .. }) => {
            console.warn(&format!("No {} found, skipping project list check", readme.display()))?
        }
        Err(ReadmeError::MarkersNotFound) => console.warn(&format!(
            "{} missing PROJECTS markers, skipping check",
            readme.display()
        ))?,
        Err(e) => {
            tracing::warn!(error = %e, "README check failed");
            console.warn(&format!("Could not read {}: {e}", readme.display()))?;
        }
    }

    Ok(u8::from(stale))
}
