//! # afoss-catalog: Folder Walker & Catalog Aggregation
//!
//! ## Walking (`scan`)
//!
//! [`scan_projects`] visits every immediate subfolder of the projects
//! directory in lexicographic order, reads its record file, parses it and
//! runs the record validator. Problems in one folder never stop the walk:
//! each folder gets a [`FolderOutcome`] and the caller decides pass/fail
//! from the whole [`ScanReport`]. Only an unreadable or empty projects
//! directory aborts the walk.
//!
//! ## Aggregation (`catalog`)
//!
//! A clean report converts into a [`Catalog`]: the valid records in folder
//! order, serialized as two-space pretty JSON with a trailing newline.
//! The catalog is all-or-nothing; a report with any failed folder does not
//! yield one.

pub mod catalog;
pub mod error;
pub mod scan;

pub use catalog::Catalog;
pub use error::{AggregateError, FolderError};
pub use scan::{inspect_folder, list_project_folders, scan_projects, FolderOutcome, ScanReport};
