//! Stable single-field sorting.

use serde::{Deserialize, Serialize};

use fill_model::DocumentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    CreatedAt,
    Status,
    Id,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Sorts by the selected field and direction.
///
/// The sort is stable: ties keep their original relative order, so
/// repeated sorts over an unchanged key set are idempotent. Name and id
/// comparisons are case-insensitive.
pub fn apply_sort(mut items: Vec<DocumentRecord>, sort: &SortSpec) -> Vec<DocumentRecord> {
    items.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Status => a.status.cmp(&b.status),
            SortField::Id => a.id.to_lowercase().cmp(&b.id.to_lowercase()),
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    items
}
