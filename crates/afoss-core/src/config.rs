//! # Layout Configuration
//!
//! Where the schema, the project folders and the two generated artifacts
//! live, relative to the repository root. Every key is optional; the
//! defaults describe the standard awesome-foss layout:
//!
//! ```yaml
//! schema: dev/schemas/project.schema.json
//! projects_dir: projects
//! record_file: project.json
//! output: dev/generated/projects.json
//! readme: README.md
//! markers:
//!   start: "<!-- PROJECTS:START - Do not remove or modify this section -->"
//!   end: "<!-- PROJECTS:END -->"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config file picked up from the repository root when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "afoss.yaml";

/// Line that opens the generated README section.
pub const DEFAULT_START_MARKER: &str =
    "<!-- PROJECTS:START - Do not remove or modify this section -->";

/// Line that closes the generated README section.
pub const DEFAULT_END_MARKER: &str = "<!-- PROJECTS:END -->";

/// Literal delimiters of the README section owned by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Contents of an `afoss.yaml` file, with defaults for omitted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Project schema, relative to the root.
    pub schema: PathBuf,
    /// Directory whose immediate subfolders are projects.
    pub projects_dir: PathBuf,
    /// File name of the record inside each project folder.
    pub record_file: String,
    /// Generated catalog path.
    pub output: PathBuf,
    /// README whose marked section is regenerated.
    pub readme: PathBuf,
    pub markers: Markers,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("dev/schemas/project.schema.json"),
            projects_dir: PathBuf::from("projects"),
            record_file: "project.json".to_string(),
            output: PathBuf::from("dev/generated/projects.json"),
            readme: PathBuf::from("README.md"),
            markers: Markers::default(),
        }
    }
}

impl CatalogConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    ///
    /// `origin` is only used in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content, &path.display().to_string())
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `afoss.yaml` at `root` is
    /// used when present, otherwise the defaults.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.markers.start.is_empty() {
            return Err(ConfigError::EmptyMarker { which: "start" });
        }
        if self.markers.end.is_empty() {
            return Err(ConfigError::EmptyMarker { which: "end" });
        }
        if self.markers.start == self.markers.end {
            return Err(ConfigError::IdenticalMarkers);
        }
        if self.record_file.is_empty()
            || self.record_file.contains('/')
            || self.record_file.contains('\\')
        {
            return Err(ConfigError::InvalidRecordFile(self.record_file.clone()));
        }
        Ok(())
    }

    /// Anchor every relative path at `root`.
    pub fn layout(&self, root: &Path) -> CatalogLayout {
        let anchor = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root.join(p)
            }
        };
        CatalogLayout {
            root: root.to_path_buf(),
            schema: anchor(&self.schema),
            projects_dir: anchor(&self.projects_dir),
            record_file: self.record_file.clone(),
            output: anchor(&self.output),
            readme: anchor(&self.readme),
            markers: self.markers.clone(),
        }
    }
}

/// Fully resolved paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    pub root: PathBuf,
    pub schema: PathBuf,
    pub projects_dir: PathBuf,
    pub record_file: String,
    pub output: PathBuf,
    pub readme: PathBuf,
    pub markers: Markers,
}

impl CatalogLayout {
    /// Default layout under `root`.
    pub fn standard(root: &Path) -> Self {
        CatalogConfig::default().layout(root)
    }

    /// Path of the record file inside a project folder.
    pub fn record_path(&self, folder: &str) -> PathBuf {
        self.projects_dir.join(folder).join(&self.record_file)
    }

    /// `path` relative to the root when it lies beneath it, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
