//! Keyboard and screen-reader checks for the Hacker News /newest page:
//! the "More" link must be reachable by tabbing, and every nav-bar entry
//! must be a real link.

use ui_checks::feed;
use ui_checks::BrowserSession;

/// Upper bound on Tab presses before giving up on reaching the More link.
const MAX_TAB_PRESSES: usize = 400;

async fn run(session: &BrowserSession) -> ui_checks::Result<bool> {
    let page = session.new_page(feed::NEWEST_URL).await?;
    page.wait_for_selector(".morelink").await?;

    let mut passed = true;

    // Walk the focus ring until the More link has focus.
    let mut reached_more_link = false;
    for _ in 0..MAX_TAB_PRESSES {
        page.press_key("Tab").await?;
        if page.focused_class().await? == "morelink" {
            reached_more_link = true;
            break;
        }
    }
    if reached_more_link {
        println!("The More button is reachable by pressing the tab key: Test pass");
    } else {
        eprintln!(
            "Test failed: More button not focused after {MAX_TAB_PRESSES} tab presses"
        );
        passed = false;
    }

    // Every nav-bar entry should carry an href for screen readers.
    let nav_links = page.find_elements(".pagetop a").await?;
    let mut missing_href = 0usize;
    for link in &nav_links {
        match link.get_attribute("href").await? {
            Some(href) if !href.is_empty() => {}
            _ => missing_href += 1,
        }
    }
    if missing_href == 0 && !nav_links.is_empty() {
        println!(
            "All {} nav bar items are labelled as links: Test pass",
            nav_links.len()
        );
    } else {
        eprintln!(
            "Test failed: {missing_href} of {} nav bar items have no href",
            nav_links.len()
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
