//! # Project Domain: Closed Tag Set
//!
//! Defines the `ProjectDomain` enum: the only values a project's optional
//! `domain` array may contain. The record validator, the shipped schema and
//! any consumer of the generated catalog all agree on this one list.

use std::str::FromStr;

use crate::error::CatalogError;

/// Domain tags a project may declare.
///
/// | Tag | Meaning |
/// |-----|---------|
/// | `Web` | Web applications and services |
/// | `AI/ML` | Machine learning and data science |
/// | `GenAI` | Generative models and LLM tooling |
/// | `Blockchain` | Distributed ledgers and smart contracts |
/// | `IoT/Embedded` | Devices, firmware, embedded systems |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectDomain {
    /// Web applications and services.
    Web,
    /// Machine learning and data science.
    AiMl,
    /// Generative models and LLM tooling.
    GenAi,
    /// Distributed ledgers and smart contracts.
    Blockchain,
    /// Devices, firmware, embedded systems.
    IotEmbedded,
}

/// Total number of project domains.
pub const PROJECT_DOMAIN_COUNT: usize = 5;

impl ProjectDomain {
    /// Returns all domains in their canonical listing order.
    pub fn all_domains() -> &'static [ProjectDomain; PROJECT_DOMAIN_COUNT] {
        &[
            Self::Web,
            Self::AiMl,
            Self::GenAi,
            Self::Blockchain,
            Self::IotEmbedded,
        ]
    }

    /// Returns the tag as it appears in `project.json`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::AiMl => "AI/ML",
            Self::GenAi => "GenAI",
            Self::Blockchain => "Blockchain",
            Self::IotEmbedded => "IoT/Embedded",
        }
    }

    /// Comma-separated list of every tag, used in violation messages.
    pub fn allowed_list() -> String {
        Self::all_domains()
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ProjectDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectDomain {
    type Err = CatalogError;

    /// Parse a tag exactly as written in `project.json` (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Web" => Ok(Self::Web),
            "AI/ML" => Ok(Self::AiMl),
            "GenAI" => Ok(Self::GenAi),
            "Blockchain" => Ok(Self::Blockchain),
            "IoT/Embedded" => Ok(Self::IotEmbedded),
            other => Err(CatalogError::UnknownDomain(other.to_string())),
        }
    }
}
