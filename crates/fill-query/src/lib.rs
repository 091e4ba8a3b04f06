//! Client-side list pipeline for fetched record lists.
//!
//! When the backend's query capability does not cover the view's current
//! filter or sort dimension, the already-fetched list is run through
//! three pure, composable functions in fixed order: filter, then sort,
//! then paginate. All three are stateless and re-invoked on every
//! relevant input change; nothing here performs I/O.

pub mod filter;
pub mod page;
pub mod query;
pub mod sort;

pub use filter::{ListFilter, apply_filters};
pub use page::{Page, paginate};
pub use query::{ListQuery, run_query};
pub use sort::{SortDirection, SortField, SortSpec, apply_sort};
