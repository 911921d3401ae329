//! Browser-backed smoke tests. These need a local Chrome install and network
//! access, so they are ignored by default; run with `cargo test -- --ignored`.

use std::time::Duration;

use ui_checks::collector::PagedSource;
use ui_checks::feed::{self, NewestFeed};
use ui_checks::BrowserSession;

#[tokio::test]
#[ignore = "requires a local Chrome install and network access"]
async fn test_launch_and_navigate() {
    let session = BrowserSession::builder()
        .headless(true)
        .build()
        .await
        .expect("Failed to launch browser");

    let page = session
        .new_page("https://example.com")
        .await
        .expect("Failed to open page");

    let title = page.title().await.expect("Failed to get title");
    assert!(title.contains("Example"), "Title was: {title}");

    let html = page.html().await.expect("Failed to get HTML");
    assert!(html.contains("Example Domain"));

    session.close().await.expect("Failed to close browser");
}

#[tokio::test]
#[ignore = "requires a local Chrome install and network access"]
async fn test_close_after_failed_operation() {
    let session = BrowserSession::builder()
        .headless(true)
        .timeout(Duration::from_secs(2))
        .build()
        .await
        .expect("Failed to launch browser");

    let page = session
        .new_page("https://example.com")
        .await
        .expect("Failed to open page");

    // A wait that cannot succeed; the session must still close cleanly.
    let missing = page.wait_for_selector("#no-such-element").await;
    assert!(missing.is_err());

    session
        .close()
        .await
        .expect("Failed to close browser after a failed wait");
}

#[tokio::test]
#[ignore = "requires a local Chrome install and network access"]
async fn test_newest_feed_first_page() {
    let session = BrowserSession::builder()
        .headless(true)
        .build()
        .await
        .expect("Failed to launch browser");

    let page = session
        .new_page(feed::NEWEST_URL)
        .await
        .expect("Failed to open page");

    let source = NewestFeed::attach(&page).await.expect("Failed to attach feed");

    assert!(source.has_more().await.expect("Failed to check More link"));

    let items = source.page_items().await.expect("Failed to read items");
    assert!(!items.is_empty(), "Expected at least one article row");
    for item in &items {
        assert!(!item.id.is_empty(), "Article row without an id");
        assert!(!item.timestamp.is_empty(), "Article {} without a timestamp", item.id);
    }

    session.close().await.expect("Failed to close browser");
}
