//! # Build Subcommand
//!
//! Validate every project, then write `projects.json` and regenerate the
//! README listing. Nothing is written unless every project is valid.
//! README problems are reported as warnings and never fail the build.

use anyhow::{Context, Result};
use clap::Args;

use afoss_core::CatalogLayout;
use afoss_readme::{update_readme, ReadmeError};

use crate::report::Console;
use crate::validate::{validate_projects, Validation};

/// Arguments for `afoss build` (also the default command).
#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// Write the catalog but leave the README untouched.
    #[arg(long)]
    pub skip_readme: bool,
}

/// Execute the build.
///
/// Returns exit code: 0 on success, 1 if any project failed validation.
pub fn run_build(args: &BuildArgs, layout: &CatalogLayout, console: &mut Console<'_>) -> Result<u8> {
    let Validation::Passed(catalog) = validate_projects(layout, console)? else {
        return Ok(1);
    };

    catalog
        .write(&layout.output)
        .context("failed to write project catalog")?;
    console.generated(layout.relative(&layout.output), catalog.len())?;

    if args.skip_readme {
        tracing::info!("README update skipped by flag");
        return Ok(0);
    }

    let readme = layout.relative(&layout.readme);
    match update_readme(&layout.readme, &layout.markers, catalog.records()) {
        Ok(()) => console.readme_updated(readme)?,
        Err(ReadmeError::NotFound { .. }) => console.warn(&format!(
            "No {} found, skipping project list update",
            readme.display()
        ))?,
        Err(ReadmeError::MarkersNotFound) => console.warn(&format!(
            "{} missing PROJECTS markers, skipping update",
            readme.display()
        ))?,
        Err(e) => {
            tracing::warn!(error = %e, "README update failed");
            console.warn(&format!("Could not update {}: {e}", readme.display()))?;
        }
    }

    Ok(0)
}
