//! Checks the Hacker News search box: it must be visible on /newest, and
//! searching a word must return only results whose title contains it.

use ui_checks::feed;
use ui_checks::BrowserSession;

const SEARCH_INPUT: &str = "input[name='q']";
const SEARCH_TERM: &str = "python";
/// Result titles on the Algolia-backed search page.
const RESULT_TITLE: &str = ".Story_title a:first-of-type";

async fn run(session: &BrowserSession) -> ui_checks::Result<bool> {
    let page = session.new_page(feed::NEWEST_URL).await?;
    page.wait_for_selector(SEARCH_INPUT).await?;

    let mut passed = true;

    if page.is_visible(SEARCH_INPUT).await? {
        println!("The search bar is present on the page: Test pass");
    } else {
        eprintln!("Test failed: search bar is not visible");
        passed = false;
    }

    page.type_text(SEARCH_INPUT, SEARCH_TERM).await?;
    let input = page.find_element(SEARCH_INPUT).await?;
    input.press_key("Enter").await?;
    page.wait_for_navigation().await?;
    page.wait_for_selector(RESULT_TITLE).await?;

    let results = page.find_elements(RESULT_TITLE).await?;
    let mut mismatches = 0usize;
    for result in &results {
        let title = result.inner_text().await.unwrap_or_default();
        if !title.to_lowercase().contains(SEARCH_TERM) {
            eprintln!("  result does not mention {SEARCH_TERM}: {title}");
            mismatches += 1;
        }
    }
    if mismatches == 0 {
        println!(
            "All {} search results contain \"{SEARCH_TERM}\": Test pass",
            results.len()
        );
    } else {
        eprintln!(
            "Test failed: {mismatches} of {} search results do not contain \"{SEARCH_TERM}\"",
            results.len()
        );
        passed = false;
    }

    Ok(passed)
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
