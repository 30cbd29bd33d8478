//! # afoss-readme: README Project Listing
//!
//! The README carries a section between two marker lines that this crate
//! owns outright. [`render_section`] turns the catalog into that section
//! (one heading per status bucket, entries sorted by name) and
//! [`splice`] swaps it in, leaving every byte outside the markers alone.
//!
//! Records whose `status` is not `active`, `idea` or `dormant` are left out
//! of the listing without complaint; they are still part of the catalog.
//!
//! Rendering is a pure function of the records, so regenerating from the
//! same catalog is idempotent.

pub mod render;
pub mod splice;

pub use render::{render_section, ListingEntry, DORMANT_PLACEHOLDER};
pub use splice::{readme_is_current, rewrite, splice, update_readme, ReadmeError};
