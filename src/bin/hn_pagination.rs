//! Checks that the "More" link survives repeated use: it must still be
//! present on each of the first ten pages of /newest.

use ui_checks::collector::first_page_without_more;
use ui_checks::feed::{self, NewestFeed};
use ui_checks::BrowserSession;

/// How many times the More link is followed before declaring it persistent.
const PAGES_TO_WALK: usize = 10;

async fn run(session: &BrowserSession) -> ui_checks::Result<bool> {
    let page = session.new_page(feed::NEWEST_URL).await?;
    let mut source = NewestFeed::attach(&page).await?;

    match first_page_without_more(&mut source, PAGES_TO_WALK).await? {
        None => {
            println!("The More button is present across {PAGES_TO_WALK} pages: Test pass");
            Ok(true)
        }
        Some(page_index) => {
            eprintln!("Test failed: More button missing on page {}", page_index + 1);
            Ok(false)
        }
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
