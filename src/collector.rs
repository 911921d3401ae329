use std::collections::HashSet;

use thiserror::Error;

use crate::error::Error as PageError;

/// How many items the stock checks accumulate before stopping.
pub const DEFAULT_TARGET_COUNT: usize = 100;

/// One listed entry: an opaque unique identifier plus the raw timestamp
/// string shown for it. The timestamp is kept verbatim; parsing happens only
/// when ordering is checked.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Item {
    pub id: String,
    pub timestamp: String,
}

/// A paged listing that can be walked forward one page at a time.
///
/// `advance` is the single suspension point of a collection run: it must not
/// return until the next page is fully loaded and readable.
#[allow(async_fn_in_trait)]
pub trait PagedSource {
    /// Whether a next-page control is still available.
    async fn has_more(&self) -> crate::Result<bool>;

    /// The items currently listed, in page order.
    async fn page_items(&self) -> crate::Result<Vec<Item>>;

    /// Navigate to the next page and wait until it is ready.
    async fn advance(&mut self) -> crate::Result<()>;
}

/// Why a collection run stopped before reaching its target.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("pagination control absent after {collected} of {target} items")]
    PaginationExhausted { collected: usize, target: usize },

    #[error("item {id} appeared on more than one page")]
    DuplicateItem { id: String },

    #[error(transparent)]
    Page(#[from] PageError),
}

/// Accumulate the first `target_count` items from `source`.
///
/// Pages are read in traversal order. Before a page's items are accepted,
/// every id on it is checked against the ids seen on earlier pages; a repeat
/// means the listing shifted under us (or pagination is broken) and the run
/// fails rather than silently re-counting. The final page may overshoot the
/// target, so the result is truncated to exactly `target_count` entries.
pub async fn collect<S: PagedSource>(
    source: &mut S,
    target_count: usize,
) -> Result<Vec<Item>, CollectionError> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut items: Vec<Item> = Vec::new();

    while items.len() < target_count {
        if !source.has_more().await? {
            return Err(CollectionError::PaginationExhausted {
                collected: items.len(),
                target: target_count,
            });
        }

        let page_items = source.page_items().await?;

        // Check the whole page before inserting anything, so the reported id
        // is the first cross-page repeat in page order.
        for item in &page_items {
            if seen_ids.contains(&item.id) {
                return Err(CollectionError::DuplicateItem {
                    id: item.id.clone(),
                });
            }
        }

        for item in page_items {
            seen_ids.insert(item.id.clone());
            items.push(item);
        }

        if items.len() < target_count {
            source.advance().await?;
        }
    }

    items.truncate(target_count);
    Ok(items)
}

/// Walk the listing forward `advances` times, confirming the next-page
/// control is present on every page visited (including the last one).
/// Returns the zero-based index of the first page without the control, or
/// `None` if it was present throughout.
pub async fn first_page_without_more<S: PagedSource>(
    source: &mut S,
    advances: usize,
) -> crate::Result<Option<usize>> {
    for page_index in 0..=advances {
        if !source.has_more().await? {
            return Ok(Some(page_index));
        }
        if page_index < advances {
            source.advance().await?;
        }
    }
    Ok(None)
}
