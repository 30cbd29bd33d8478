//! # Project Folder Walk
//!
//! Enumerates `projects/*/` and turns each folder into a [`FolderOutcome`].
//! Folder name order is plain byte order of the names, which is also the
//! order of the generated catalog.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use afoss_core::CatalogLayout;
use afoss_schema::RecordValidator;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::{AggregateError, FolderError};

/// Result of processing one project folder.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderOutcome {
    /// Folder name, which is also the expected slug.
    pub folder: String,
    /// Path of the record file that was (or would have been) read.
    pub record_path: PathBuf,
    /// The parsed record when it is valid.
    pub result: Result<Value, FolderError>,
}

impl FolderOutcome {
    /// Whether this folder produced a valid record.
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes for every folder, in walk order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    outcomes: Vec<FolderOutcome>,
}

impl ScanReport {
    /// Per-folder outcomes, in walk order.
    pub fn outcomes(&self) -> &[FolderOutcome] {
        &self.outcomes
    }

    /// Number of folders visited.
    pub fn folder_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of folders that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_valid()).count()
    }

    /// True when every folder produced a valid record.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(FolderOutcome::is_valid)
    }

    /// Valid records, in walk order.
    pub fn valid_records(&self) -> impl Iterator<Item = &Value> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Build the catalog if every folder is valid; otherwise hand the
    /// report back unchanged.
    pub fn into_catalog(self) -> Result<Catalog, ScanReport> {
        if !self.is_clean() {
            return Err(self);
        }
        let records = self
            .outcomes
            .into_iter()
            .filter_map(|o| o.result.ok())
            .collect();
        Ok(Catalog::from_records(records))
    }
}

/// Names of the immediate subdirectories of `dir`, sorted.
///
/// Plain files are ignored. Fails when `dir` cannot be listed or has no
/// subdirectories.
pub fn list_project_folders(dir: &Path) -> Result<Vec<String>, AggregateError> {
    let unreadable = |source| AggregateError::ProjectsDirUnreadable {
        path: dir.display().to_string(),
        source,
    };

    let mut folders = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if entry.path().is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    if folders.is_empty() {
        return Err(AggregateError::NoProjects {
            path: dir.display().to_string(),
        });
    }
    folders.sort();
    Ok(folders)
}

/// Read, parse and validate one project folder.
pub fn inspect_folder(
    layout: &CatalogLayout,
    folder: &str,
    validator: &RecordValidator,
) -> FolderOutcome {
    let record_path = layout.record_path(folder);
    let result = load_and_validate(&record_path, &layout.record_file, folder, validator);

    match &result {
        Ok(_) => tracing::debug!(folder, "record valid"),
        Err(e) => tracing::debug!(folder, error = %e, "record rejected"),
    }

    FolderOutcome {
        folder: folder.to_string(),
        record_path,
        result,
    }
}

fn load_and_validate(
    path: &Path,
    file_name: &str,
    folder: &str,
    validator: &RecordValidator,
) -> Result<Value, FolderError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FolderError::MissingRecord {
            file: file_name.to_string(),
        },
        _ => FolderError::Unreadable {
            file: file_name.to_string(),
            reason: e.to_string(),
        },
    })?;

    let record: Value =
        serde_json::from_str(&raw).map_err(|e| FolderError::InvalidJson(e.to_string()))?;

    let violations = validator.validate(&record, folder);
    if violations.is_empty() {
        Ok(record)
    } else {
        Err(FolderError::Invalid(violations))
    }
}

/// Walk every project folder under `layout.projects_dir`.
pub fn scan_projects(
    layout: &CatalogLayout,
    validator: &RecordValidator,
) -> Result<ScanReport, AggregateError> {
    let folders = list_project_folders(&layout.projects_dir)?;
    tracing::info!(
        projects_dir = %layout.projects_dir.display(),
        folders = folders.len(),
        "scanning project folders"
    );

    let outcomes = folders
        .iter()
        .map(|folder| inspect_folder(layout, folder, validator))
        .collect();
    let report = ScanReport { outcomes };

    tracing::info!(
        total = report.folder_count(),
        failed = report.failed_count(),
        "scan complete"
    );
    Ok(report)
}
