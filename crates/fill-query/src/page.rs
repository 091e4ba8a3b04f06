//! Pagination over an already filtered and sorted list.

use serde::{Deserialize, Serialize};

/// One page of results plus the counts the pager needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Pre-pagination item count (the filtered total, not the raw total).
    pub total: usize,
    pub total_pages: usize,
}

/// Slices the given list into the requested page.
///
/// Pages are 1-based; page 0 is treated as page 1. A page past the end
/// yields empty `data` while `total`/`total_pages` still describe the
/// whole list. `page_size == 0` yields no data and zero pages but keeps
/// `total` intact.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    if page_size == 0 {
        return Page {
            data: Vec::new(),
            total,
            total_pages: 0,
        };
    }
    let total_pages = total.div_ceil(page_size);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    let data = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(page_size).collect()
    };
    Page {
        data,
        total,
        total_pages,
    }
}
