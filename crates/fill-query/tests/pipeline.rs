use chrono::{TimeZone, Utc};

use fill_model::{DocumentRecord, DocumentStatus};
use fill_query::{
    ListFilter, ListQuery, SortDirection, SortField, SortSpec, apply_filters, apply_sort,
    paginate, run_query,
};

fn record(id: &str, name: &str, status: DocumentStatus, day: u32) -> DocumentRecord {
    DocumentRecord {
        id: id.to_string(),
        name: name.to_string(),
        status,
        created_at: Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
        tags: Vec::new(),
    }
}

fn sample_records() -> Vec<DocumentRecord> {
    vec![
        record("1", "b", DocumentStatus::Done, 1),
        record("2", "a", DocumentStatus::Done, 2),
        record("3", "c", DocumentStatus::Pending, 3),
    ]
}

#[test]
fn filter_then_sort_then_paginate_order() {
    let records = sample_records();
    let query = ListQuery {
        filter: ListFilter {
            status: Some(DocumentStatus::Done),
            ..ListFilter::default()
        },
        sort: Some(SortSpec::ascending(SortField::Name)),
        page: 1,
        page_size: 10,
    };

    let page = run_query(&records, &query);
    let ids: Vec<&str> = page.data.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn totals_describe_the_filtered_set_not_the_raw_one() {
    let records = sample_records();
    let query = ListQuery {
        filter: ListFilter {
            status: Some(DocumentStatus::Done),
            ..ListFilter::default()
        },
        sort: None,
        page: 1,
        page_size: 1,
    };

    let page = run_query(&records, &query);
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data.len(), 1);
}

#[test]
fn pagination_slices_the_tail_page() {
    let items: Vec<u32> = (0..25).collect();
    let page = paginate(items, 3, 10);
    assert_eq!(page.data.len(), 5);
    assert_eq!(page.data, (20..25).collect::<Vec<u32>>());
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn pagination_edges() {
    // Page past the end: empty data, counts intact
    let page = paginate((0..25).collect::<Vec<u32>>(), 4, 10);
    assert!(page.data.is_empty());
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);

    // Page 0 is treated as page 1
    let page = paginate((0..25).collect::<Vec<u32>>(), 0, 10);
    assert_eq!(page.data, (0..10).collect::<Vec<u32>>());

    // Zero page size: no data, no pages, total preserved
    let page = paginate((0..25).collect::<Vec<u32>>(), 1, 0);
    assert!(page.data.is_empty());
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 0);

    // Empty input
    let page = paginate(Vec::<u32>::new(), 1, 10);
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

#[test]
fn unset_filter_dimensions_pass_everything() {
    let records = sample_records();
    assert_eq!(apply_filters(&records, &ListFilter::default()).len(), 3);

    // An empty search string counts as unset
    let filter = ListFilter {
        search: Some("   ".to_string()),
        ..ListFilter::default()
    };
    assert_eq!(apply_filters(&records, &filter).len(), 3);
}

#[test]
fn filter_dimensions_are_and_combined() {
    let mut records = sample_records();
    records[0].tags = vec!["tax".to_string(), "2025".to_string()];
    records[1].tags = vec!["tax".to_string()];

    let filter = ListFilter {
        status: Some(DocumentStatus::Done),
        tags: vec!["TAX".to_string(), "2025".to_string()],
        ..ListFilter::default()
    };
    let kept = apply_filters(&records, &filter);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "1");
}

#[test]
fn search_matches_name_or_id_case_insensitively() {
    let records = vec![
        record("doc-7", "Lease Agreement", DocumentStatus::Done, 1),
        record("doc-8", "W-2 2025", DocumentStatus::Done, 2),
    ];
    let filter = ListFilter {
        search: Some("lease".to_string()),
        ..ListFilter::default()
    };
    assert_eq!(apply_filters(&records, &filter).len(), 1);

    let filter = ListFilter {
        search: Some("DOC-8".to_string()),
        ..ListFilter::default()
    };
    let kept = apply_filters(&records, &filter);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "doc-8");
}

#[test]
fn date_range_bounds_are_inclusive() {
    let records = sample_records();
    let filter = ListFilter {
        created_after: Some(Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap()),
        created_before: Some(Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap()),
        ..ListFilter::default()
    };
    let kept = apply_filters(&records, &filter);
    let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[test]
fn sort_is_stable_on_ties() {
    let records = vec![
        record("1", "same", DocumentStatus::Done, 1),
        record("2", "same", DocumentStatus::Pending, 2),
        record("3", "same", DocumentStatus::Done, 3),
    ];
    let sorted = apply_sort(records.clone(), &SortSpec::ascending(SortField::Name));
    let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    // Descending over equal keys preserves order too
    let sorted = apply_sort(records, &SortSpec::descending(SortField::Name));
    let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn repeated_sorts_are_idempotent() {
    let records = sample_records();
    let spec = SortSpec {
        field: SortField::CreatedAt,
        direction: SortDirection::Desc,
    };
    let once = apply_sort(records, &spec);
    let twice = apply_sort(once.clone(), &spec);
    assert_eq!(once, twice);
}

#[test]
fn sort_by_status_follows_lifecycle_order() {
    let records = vec![
        record("1", "x", DocumentStatus::Archived, 1),
        record("2", "y", DocumentStatus::Pending, 2),
        record("3", "z", DocumentStatus::Done, 3),
    ];
    let sorted = apply_sort(records, &SortSpec::ascending(SortField::Status));
    let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
}

#[test]
fn query_state_round_trips_through_json() {
    let query = ListQuery {
        filter: ListFilter {
            search: Some("w-2".to_string()),
            status: Some(DocumentStatus::Done),
            ..ListFilter::default()
        },
        sort: Some(SortSpec::descending(SortField::CreatedAt)),
        page: 2,
        page_size: 25,
    };
    let json = serde_json::to_string(&query).expect("serialize query");
    let round: ListQuery = serde_json::from_str(&json).expect("deserialize query");
    assert_eq!(round, query);
}
