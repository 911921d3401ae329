use chrono::{Duration, NaiveDate};

use ui_checks::collector::{
    collect, first_page_without_more, CollectionError, Item, PagedSource, DEFAULT_TARGET_COUNT,
};
use ui_checks::order;

/// Deterministic stand-in for a paged listing. `has_more` reports whether a
/// page is left to read, the way the live page reports its More link.
struct FakeSource {
    pages: Vec<Vec<Item>>,
    current: usize,
    advances: usize,
}

impl FakeSource {
    fn new(pages: Vec<Vec<Item>>) -> Self {
        Self {
            pages,
            current: 0,
            advances: 0,
        }
    }
}

impl PagedSource for FakeSource {
    async fn has_more(&self) -> ui_checks::Result<bool> {
        Ok(self.current < self.pages.len())
    }

    async fn page_items(&self) -> ui_checks::Result<Vec<Item>> {
        Ok(self.pages[self.current].clone())
    }

    async fn advance(&mut self) -> ui_checks::Result<()> {
        self.current += 1;
        self.advances += 1;
        Ok(())
    }
}

fn item(id: &str, timestamp: &str) -> Item {
    Item {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// Pages of `page_size` items with ids `item-0`, `item-1`, ... and strictly
/// decreasing timestamps one minute apart.
fn decreasing_pages(page_count: usize, page_size: usize) -> Vec<Vec<Item>> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    (0..page_count)
        .map(|p| {
            (0..page_size)
                .map(|i| {
                    let n = (p * page_size + i) as i64;
                    let at = base - Duration::minutes(n);
                    item(&format!("item-{n}"), &at.format("%Y-%m-%dT%H:%M:%S").to_string())
                })
                .collect()
        })
        .collect()
}

#[tokio::test]
async fn collects_exactly_one_hundred_from_four_pages_of_thirty() {
    let mut source = FakeSource::new(decreasing_pages(4, 30));

    let items = collect(&mut source, DEFAULT_TARGET_COUNT)
        .await
        .expect("collection should succeed");

    assert_eq!(items.len(), DEFAULT_TARGET_COUNT);
    // Page-traversal order is preserved.
    for (n, it) in items.iter().enumerate() {
        assert_eq!(it.id, format!("item-{n}"));
    }
    // The final page is read without advancing past it.
    assert_eq!(source.advances, 3);

    let timestamps: Vec<&str> = items.iter().map(|i| i.timestamp.as_str()).collect();
    assert!(order::is_descending(&timestamps));
}

#[tokio::test]
async fn returned_ids_are_pairwise_distinct() {
    let mut source = FakeSource::new(decreasing_pages(4, 30));

    let items = collect(&mut source, DEFAULT_TARGET_COUNT)
        .await
        .expect("collection should succeed");

    let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), DEFAULT_TARGET_COUNT);
}

#[tokio::test]
async fn fails_on_duplicate_id_across_pages() {
    let pages = vec![
        vec![
            item("A", "2024-01-02T10:00:00"),
            item("B", "2024-01-02T09:59:00"),
        ],
        vec![
            item("B", "2024-01-02T09:59:00"),
            item("C", "2024-01-02T09:58:00"),
        ],
    ];
    let mut source = FakeSource::new(pages);

    let err = collect(&mut source, 4).await.unwrap_err();
    match err {
        CollectionError::DuplicateItem { id } => assert_eq!(id, "B"),
        other => panic!("expected DuplicateItem, got {other:?}"),
    }
}

#[tokio::test]
async fn fails_when_pagination_runs_out_below_target() {
    let mut source = FakeSource::new(decreasing_pages(2, 20));

    let err = collect(&mut source, DEFAULT_TARGET_COUNT).await.unwrap_err();
    match err {
        CollectionError::PaginationExhausted { collected, target } => {
            assert_eq!(collected, 40);
            assert_eq!(target, DEFAULT_TARGET_COUNT);
        }
        other => panic!("expected PaginationExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn truncates_an_overshooting_final_page() {
    let pages = vec![vec![
        item("A", "2024-01-02T10:00:00"),
        item("B", "2024-01-02T09:00:00"),
        item("C", "2024-01-02T08:00:00"),
    ]];
    let mut source = FakeSource::new(pages);

    let items = collect(&mut source, 2).await.expect("collection should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "A");
    assert_eq!(items[1].id, "B");
    assert_eq!(source.advances, 0);
}

#[tokio::test]
async fn more_control_stays_present_across_ten_pages() {
    let mut source = FakeSource::new(decreasing_pages(11, 5));

    let missing = first_page_without_more(&mut source, 10)
        .await
        .expect("walk should succeed");

    assert_eq!(missing, None);
    assert_eq!(source.advances, 10);
}

#[tokio::test]
async fn reports_the_page_where_the_more_control_disappears() {
    let mut source = FakeSource::new(decreasing_pages(5, 5));

    let missing = first_page_without_more(&mut source, 10)
        .await
        .expect("walk should succeed");

    assert_eq!(missing, Some(5));
    assert_eq!(source.advances, 5);
}

#[tokio::test]
async fn single_page_meeting_target_does_not_advance() {
    let pages = decreasing_pages(1, 30);
    let mut source = FakeSource::new(pages);

    let items = collect(&mut source, 30).await.expect("collection should succeed");

    assert_eq!(items.len(), 30);
    assert_eq!(source.advances, 0);
}
