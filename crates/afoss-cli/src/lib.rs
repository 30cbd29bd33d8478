//! # afoss-cli: awesome-foss Catalog CLI
//!
//! Provides the `afoss` command. Run from anywhere inside the repository:
//!
//! ```bash
//! afoss          # same as `afoss build`
//! afoss build    # validate, write dev/generated/projects.json, update README.md
//! afoss check    # validate and verify both artifacts are current; writes nothing
//! ```
//!
//! Exit code 0 means success; 1 means a validation, read or staleness
//! problem was reported (or the run could not start).
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here delegate to the
//!   domain crates and only decide what to print and which exit code to use.

pub mod build;
pub mod check;
pub mod report;
pub mod validate;

use std::path::{Path, PathBuf};

/// Walk up from `start` to the repository root.
///
/// The root is the first directory holding both `projects/` and `dev/`.
pub fn resolve_repo_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join("projects").is_dir() && dir.join("dev").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Resolve a `--config` path.
///
/// Absolute paths are kept. A relative path names a file under `repo_root`
/// when one exists there, and is taken relative to the working directory
/// otherwise.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}
