//! Rendering of the status-grouped project listing.

use std::cmp::Ordering;

use afoss_core::ProjectStatus;
use icu_collator::{Collator, CollatorOptions};
use serde::Deserialize;
use serde_json::Value;

/// Line shown under the Dormant heading when no project is dormant.
pub const DORMANT_PLACEHOLDER: &str = "_No dormant projects yet. Let's keep it that way_ 💪";

/// The fields of a record the listing needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingEntry {
    pub name: String,
    pub github_repo: String,
    pub tagline: String,
    pub status: String,
}

impl ListingEntry {
    /// Extract the listing fields; `None` if any of them is not a string.
    pub fn from_record(record: &Value) -> Option<Self> {
        Self::deserialize(record).ok()
    }

    /// `- [name](repo) — tagline.`
    pub fn bullet(&self) -> String {
        format!("- [{}]({}) — {}.", self.name, self.github_repo, self.tagline)
    }
}

/// Root-locale collator used for name order. `None` falls back to a
/// case-folded comparison.
fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = ?e, "root collator unavailable; sorting by case-folded name");
            None
        }
    }
}

/// Locale-aware name order; on a case-only tie lowercase sorts first.
fn collate(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    let primary = match collator {
        Some(c) => c.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    primary.then_with(|| b.cmp(a))
}

/// Render the text that goes between the start and end markers.
///
/// The result begins and ends with a newline so that the markers sit on
/// their own lines once spliced in.
pub fn render_section(records: &[Value]) -> String {
    let mut buckets: Vec<(ProjectStatus, ListingEntry)> = Vec::with_capacity(records.len());
    for record in records {
        let slug = record.get("slug").cloned().unwrap_or_default();
        let Some(entry) = ListingEntry::from_record(record) else {
            tracing::warn!(%slug, "record has non-string listing fields; left out of README");
            continue;
        };
        match entry.status.parse::<ProjectStatus>() {
            Ok(status) => buckets.push((status, entry)),
            Err(e) => tracing::debug!(%slug, error = %e, "not listed in README"),
        }
    }

    let collator = root_collator();
    let mut lines: Vec<String> = vec![String::new()];
    for status in ProjectStatus::all() {
        let mut bucket: Vec<&ListingEntry> = buckets
            .iter()
            .filter(|(s, _)| s == status)
            .map(|(_, e)| e)
            .collect();
        bucket.sort_by(|a, b| collate(collator.as_ref(), &a.name, &b.name));

        if bucket.is_empty() && *status != ProjectStatus::Dormant {
            continue;
        }

        lines.push(format!("### {}", status.heading()));
        lines.push(String::new());
        if bucket.is_empty() {
            lines.push(DORMANT_PLACEHOLDER.to_string());
        } else {
            lines.extend(bucket.iter().map(|e| e.bullet()));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
