//! # Catalog
//!
//! The aggregated list of valid project records and its on-disk form.

use std::path::Path;

use serde_json::Value;

use crate::error::AggregateError;

/// Valid project records in folder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Value>,
}

impl Catalog {
    /// Wrap records that have already been validated.
    pub fn from_records(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Two-space pretty JSON array with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, AggregateError> {
        let mut text = serde_json::to_string_pretty(&self.records)?;
        text.push('\n');
        Ok(text)
    }

    /// Whether `path` already holds exactly what [`Catalog::write`] would write.
    pub fn is_current(&self, path: &Path) -> Result<bool, AggregateError> {
        let expected = self.to_pretty_json()?;
        Ok(std::fs::read_to_string(path).is_ok_and(|existing| existing == expected))
    }

    /// Write the catalog, creating missing parent directories.
    pub fn write(&self, path: &Path) -> Result<(), AggregateError> {
        let text = self.to_pretty_json()?;
        let write_err = |source| AggregateError::Write {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, text).map_err(write_err)?;
        tracing::info!(path = %path.display(), records = self.len(), "wrote catalog");
        Ok(())
    }
}
