//! # Validation Step
//!
//! Shared first half of `build` and `check`: load the schema, walk every
//! project folder, print each folder's result, and decide pass/fail only
//! after all folders have been seen.

use anyhow::{Context, Result};

use afoss_catalog::{scan_projects, AggregateError, Catalog};
use afoss_core::CatalogLayout;
use afoss_schema::RecordValidator;

use crate::report::Console;

/// Result of validating the whole project set.
#[derive(Debug)]
pub enum Validation {
    /// Every folder held a valid record.
    Passed(Catalog),
    /// At least one problem was reported.
    Failed,
}

/// Validate every project folder under the layout's projects directory.
///
/// Returns `Err` only for a schema that cannot be used; every other
/// problem is printed and folded into [`Validation::Failed`].
pub fn validate_projects(layout: &CatalogLayout, console: &mut Console<'_>) -> Result<Validation> {
    let validator = RecordValidator::load(&layout.schema).with_context(|| {
        format!(
            "failed to load project schema {}",
            layout.relative(&layout.schema).display()
        )
    })?;

    let projects_dir = layout.relative(&layout.projects_dir).display().to_string();
    let report = match scan_projects(layout, &validator) {
        Ok(report) => report,
        Err(AggregateError::NoProjects { .. }) => {
            console.fatal(&format!("No project folders found in {projects_dir}/"))?;
            return Ok(Validation::Failed);
        }
        Err(e) => {
            tracing::debug!(error = %e, "projects directory scan failed");
            console.fatal(&format!("Could not read {projects_dir}/ directory"))?;
            return Ok(Validation::Failed);
        }
    };

    console.found(report.folder_count())?;
    for outcome in report.outcomes() {
        console.folder(outcome, &layout.record_file)?;
    }

    match report.into_catalog() {
        Ok(catalog) => Ok(Validation::Passed(catalog)),
        Err(report) => {
            tracing::info!(failed = report.failed_count(), "validation failed");
            console.validation_failed()?;
            Ok(Validation::Failed)
        }
    }
}
