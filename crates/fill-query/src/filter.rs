//! Predicate-based exclusion over fetched record lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fill_model::{DocumentRecord, DocumentStatus};

/// Filter dimensions for a document list.
///
/// Each set dimension is an independent predicate and all of them must
/// hold (AND); unset dimensions pass everything. An empty search string
/// counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Case-insensitive substring over name and id.
    pub search: Option<String>,
    pub status: Option<DocumentStatus>,
    /// Every listed tag must be present on the record.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub created_before: Option<DateTime<Utc>>,
}

impl ListFilter {
    pub fn matches(&self, record: &DocumentRecord) -> bool {
        if let Some(needle) = &self.search
            && !needle.trim().is_empty()
        {
            let needle = needle.trim().to_lowercase();
            let hit = record.name.to_lowercase().contains(&needle)
                || record.id.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status
            && record.status != status
        {
            return false;
        }
        if !self.tags.iter().all(|tag| {
            record
                .tags
                .iter()
                .any(|record_tag| record_tag.eq_ignore_ascii_case(tag))
        }) {
            return false;
        }
        if let Some(after) = self.created_after
            && record.created_at < after
        {
            return false;
        }
        if let Some(before) = self.created_before
            && record.created_at > before
        {
            return false;
        }
        true
    }
}

/// Keeps the records the filter accepts, in their original order.
pub fn apply_filters(items: &[DocumentRecord], filter: &ListFilter) -> Vec<DocumentRecord> {
    items
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
