//! # Project Status
//!
//! The lifecycle states the README listing groups projects by. A record
//! may carry a status outside this set when the schema allows it; such
//! records stay in the catalog but are not listed in the README.

use std::str::FromStr;

use crate::error::CatalogError;

/// Lifecycle state of a listed project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectStatus {
    /// Being worked on.
    Active,
    /// Proposed, looking for people to start it.
    Idea,
    /// No recent activity.
    Dormant,
}

impl ProjectStatus {
    /// All statuses in README section order.
    pub fn all() -> &'static [ProjectStatus] {
        &[Self::Active, Self::Idea, Self::Dormant]
    }

    /// The `status` value as written in `project.json`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idea => "idea",
            Self::Dormant => "dormant",
        }
    }

    /// README section heading text.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Idea => "Ideas",
            Self::Dormant => "Dormant",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "idea" => Ok(Self::Idea),
            "dormant" => Ok(Self::Dormant),
            other => Err(CatalogError::UnknownStatus(other.to_string())),
        }
    }
}
