//! # Error Types
//!
//! Shared error hierarchy for the catalog tooling. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Per-record rule violations are not errors in this sense: they are
//! collected as data by `afoss-schema` and reported together. The types
//! here cover conditions that stop a run or reject an identifier.

use thiserror::Error;

/// An identifier outside one of the closed vocabularies.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A status string is not one of the known lifecycle states.
    #[error("unknown project status: {0:?}")]
    UnknownStatus(String),

    /// A domain tag is not one of the known domains.
    #[error("unknown project domain: {0:?}")]
    UnknownDomain(String),
}

/// Error loading or checking an `afoss.yaml` configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config file '{path}': {source}")]
    Read {
        /// Path to the configuration file.
        path: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected shape.
    #[error("invalid config file '{path}': {reason}")]
    Parse {
        /// Path to the configuration file.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// A README marker is empty.
    #[error("README {which} marker must not be empty")]
    EmptyMarker {
        /// `"start"` or `"end"`.
        which: &'static str,
    },

    /// Start and end markers are the same string.
    #[error("README start and end markers must differ")]
    IdenticalMarkers,

    /// The record file name is empty or contains a path separator.
    #[error("record_file must be a bare file name, got {0:?}")]
    InvalidRecordFile(String),
}
