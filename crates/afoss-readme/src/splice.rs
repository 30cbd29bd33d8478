//! Locating the marker pair and replacing what lies between them.

use std::io::ErrorKind;
use std::path::Path;

use afoss_core::Markers;
use serde_json::Value;
use thiserror::Error;

use crate::render::render_section;

/// Why the README listing could not be regenerated.
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// There is no README at the configured path.
    #[error("no README found at '{path}'")]
    NotFound {
        /// README path.
        path: String,
    },

    /// The README exists but could not be read or written.
    #[error("cannot access README '{path}': {source}")]
    Io {
        /// README path.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The start marker, or an end marker after it, is missing.
    #[error("README is missing the project list markers")]
    MarkersNotFound,
}

/// Replace the text between the markers with `section`.
///
/// The end marker is searched for after the start marker. Returns `None`
/// when either is missing.
pub fn splice(readme: &str, markers: &Markers, section: &str) -> Option<String> {
    let start = readme.find(&markers.start)?;
    let body_from = start + markers.start.len();
    let end = body_from + readme[body_from..].find(&markers.end)?;

    let mut out = String::with_capacity(readme.len() + section.len());
    out.push_str(&readme[..body_from]);
    out.push('\n');
    out.push_str(section);
    out.push_str(&readme[end..]);
    Some(out)
}

/// Render the listing for `records` and splice it into `readme`.
pub fn rewrite(readme: &str, markers: &Markers, records: &[Value]) -> Result<String, ReadmeError> {
    splice(readme, markers, &render_section(records)).ok_or(ReadmeError::MarkersNotFound)
}

fn read_readme(path: &Path) -> Result<String, ReadmeError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReadmeError::NotFound {
            path: path.display().to_string(),
        },
        _ => ReadmeError::Io {
            path: path.display().to_string(),
            source,
        },
    })
}

/// Regenerate the listing in the README at `path`.
///
/// The new README is computed in full before the single write.
pub fn update_readme(path: &Path, markers: &Markers, records: &[Value]) -> Result<(), ReadmeError> {
    let current = read_readme(path)?;
    let updated = rewrite(&current, markers, records)?;
    std::fs::write(path, updated).map_err(|source| ReadmeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "updated README project list");
    Ok(())
}

/// Whether the README at `path` already shows the listing for `records`.
pub fn readme_is_current(
    path: &Path,
    markers: &Markers,
    records: &[Value],
) -> Result<bool, ReadmeError> {
    let current = read_readme(path)?;
    Ok(rewrite(&current, markers, records)? == current)
}
