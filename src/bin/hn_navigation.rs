//! Checks that clicking the first article title on /newest lands on the
//! URL its href advertises.

use ui_checks::feed;
use ui_checks::{BrowserSession, Error};

async fn run(session: &BrowserSession) -> ui_checks::Result<bool> {
    let page = session.new_page(feed::NEWEST_URL).await?;
    page.wait_for_selector(".athing").await?;

    let title_link = page.find_element(".athing .titleline a").await?;
    let href = title_link
        .get_attribute("href")
        .await?
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::ElementNotFound("first article title has no href".into()))?;

    title_link.click().await?;
    page.wait_for_navigation().await?;

    let current_url = page.url().await?;
    if current_url.contains(&href) {
        println!("Selecting the first article navigates to {href}: Test pass");
        Ok(true)
    } else {
        eprintln!("Test failed: expected URL containing {href}, landed on {current_url}");
        Ok(false)
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
