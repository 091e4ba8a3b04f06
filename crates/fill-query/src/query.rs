//! The combined list query: filter, then sort, then paginate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fill_model::DocumentRecord;

use crate::filter::{ListFilter, apply_filters};
use crate::page::{Page, paginate};
use crate::sort::{SortSpec, apply_sort};

/// The full preference state for one list view, passed explicitly by
/// whoever owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: ListFilter,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: ListFilter::default(),
            sort: None,
            page: 1,
            page_size: 10,
        }
    }
}

/// Runs the pipeline in its one fixed order: filter, sort, paginate.
///
/// The order is not parameterizable; filtering must precede pagination
/// for `total`/`total_pages` to describe the filtered set rather than
/// the raw one.
pub fn run_query(items: &[DocumentRecord], query: &ListQuery) -> Page<DocumentRecord> {
    let filtered = apply_filters(items, &query.filter);
    let sorted = match &query.sort {
        Some(sort) => apply_sort(filtered, sort),
        None => filtered,
    };
    let page = paginate(sorted, query.page, query.page_size);
    debug!(
        fetched = items.len(),
        total = page.total,
        page = query.page,
        "list query evaluated"
    );
    page
}
