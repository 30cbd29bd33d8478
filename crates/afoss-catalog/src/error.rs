//! Errors raised while walking project folders and writing the catalog.

use afoss_schema::ValidationViolations;
use thiserror::Error;

/// A condition that stops the run as a whole.
#[derive(Error, Debug)]
pub enum AggregateError {
    /// The projects directory is missing or cannot be listed.
    #[error("could not read projects directory '{path}': {source}")]
    ProjectsDirUnreadable {
        /// Projects directory.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The projects directory has no subfolders.
    #[error("no project folders found in '{path}'")]
    NoProjects {
        /// Projects directory.
        path: String,
    },

    /// The catalog could not be serialized.
    #[error("cannot serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The catalog file or its directory could not be written.
    #[error("cannot write catalog '{path}': {source}")]
    Write {
        /// Output path.
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why one project folder did not produce a valid record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolderError {
    /// The folder has no record file.
    #[error("Missing {file}")]
    MissingRecord {
        /// Record file name.
        file: String,
    },

    /// The record file exists but could not be read.
    #[error("Could not read {file}: {reason}")]
    Unreadable {
        /// Record file name.
        file: String,
        /// IO error message.
        reason: String,
    },

    /// The record file is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The record parsed but broke one or more rules.
    #[error("{0}")]
    Invalid(ValidationViolations),
}
