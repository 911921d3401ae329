//! Checks that the first 100 articles on Hacker News /newest are listed
//! newest-first, paging through the "More" link and refusing duplicates.

use ui_checks::collector::{collect, CollectionError, DEFAULT_TARGET_COUNT};
use ui_checks::feed::{self, NewestFeed};
use ui_checks::{order, BrowserSession};

async fn run(session: &BrowserSession) -> ui_checks::Result<bool> {
    let page = session.new_page(feed::NEWEST_URL).await?;
    let mut source = NewestFeed::attach(&page).await?;

    match collect(&mut source, DEFAULT_TARGET_COUNT).await {
        Ok(items) => {
            let timestamps: Vec<&str> = items.iter().map(|i| i.timestamp.as_str()).collect();
            match order::first_ascent(&timestamps) {
                None => {
                    println!(
                        "The first {DEFAULT_TARGET_COUNT} articles are in the correct order: Test pass"
                    );
                    Ok(true)
                }
                Some(i) => {
                    eprintln!(
                        "Test failed: articles {} and {} are out of order ({:?} then {:?})",
                        i + 1,
                        i + 2,
                        timestamps[i],
                        timestamps[i + 1],
                    );
                    Ok(false)
                }
            }
        }
        Err(CollectionError::PaginationExhausted { collected, target }) => {
            eprintln!("Test failed: More button not present after {collected} of {target} articles");
            Ok(false)
        }
        Err(CollectionError::DuplicateItem { id }) => {
            eprintln!("Test failed: article {id} found on more than one page");
            Ok(false)
        }
        Err(CollectionError::Page(e)) => Err(e),
    }
}

#[tokio::main]
async fn main() -> ui_checks::Result<()> {
    let session = BrowserSession::builder().headless(true).build().await?;
    let outcome = run(&session).await;
    let closed = session.close().await;
    let passed = outcome?;
    closed?;
    if !passed {
        std::process::exit(1);
    }
    Ok(())
}
