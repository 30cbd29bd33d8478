//! # afoss-core: Foundational Types for the Catalog Tooling
//!
//! Every other `afoss-*` crate depends on this one; it depends on nothing
//! internal.
//!
//! ## Contents
//!
//! - [`ProjectStatus`]: the lifecycle states that drive README grouping.
//! - [`ProjectDomain`]: the closed set of domain tags a project may carry.
//! - [`CatalogConfig`] / [`CatalogLayout`]: optional `afoss.yaml` overrides
//!   and the resolved input/output paths for one run.
//! - [`CatalogError`] / [`ConfigError`]: the shared error hierarchy.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `afoss-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod domain;
pub mod error;
pub mod status;

pub use config::{
    CatalogConfig, CatalogLayout, Markers, DEFAULT_CONFIG_FILE, DEFAULT_END_MARKER,
    DEFAULT_START_MARKER,
};
pub use domain::{ProjectDomain, PROJECT_DOMAIN_COUNT};
pub use error::{CatalogError, ConfigError};
pub use status::ProjectStatus;
