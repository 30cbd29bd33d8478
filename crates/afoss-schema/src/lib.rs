//! # afoss-schema: Project Schema & Record Validation
//!
//! ## Schema Loading (`schema`)
//!
//! [`ProjectSchema::load`] reads `project.schema.json` once per run, checks
//! it is a well-formed JSON Schema, and extracts the parts the record rules
//! consult: the `required` list and, per property, `type`, `minLength`,
//! `maxLength`, `enum` and `pattern`.
//!
//! ## Record Validation (`validate`)
//!
//! [`RecordValidator::validate`] checks one parsed `project.json` against
//! the schema and the cross-field rules (slug equals folder name, kebab-case
//! slug, tech stack, maintainers, contributor flag, domain tags) and returns
//! every [`Violation`] found. An empty result means the record is valid.
//!
//! ## Crate Policy
//!
//! - Depends only on `afoss-core` internally.
//! - Validation never stops at the first problem, except that a record with
//!   missing or unknown fields gets no structural checks.

pub mod schema;
pub mod validate;

pub use schema::{PropertySpec, ProjectSchema, SchemaError};
pub use validate::{RecordValidator, ValidationViolations, Violation};
