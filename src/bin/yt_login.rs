//! Checks that signing in to YouTube with a made-up account shows the
//! account-not-found error message.

use std::time::Duration;

use ui_checks::BrowserSession;

const YOUTUBE_URL: &str = "https://www.youtube.com";
const INVALID_EMAIL: &str = "invalidID@bubbles.com";
/// Google renders the identifier error inside this pair of classes.
const ERROR_SELECTOR: &str = ".Ekjuhf.Jj6Lae";
/// Matched without the apostrophe so the check is independent of which
/// quote character Google renders.
const ERROR_TEXT: &str = "find your Google Account";

async fn run(session: &BrowserSession) -> ui_checks::Result<bool> {
    let page = session.new_page(YOUTUBE_URL).await?;
    tokio::time::sleep(Duration::from_secs(2)).await;

    // The consent dialog only appears in some regions.
    let _ = page.click_by_text("button", "Accept all").await;
    tokio::time::sleep(Duration::from_millis(500)).await;

    let clicked = page.click_by_text("a", "Sign in").await?;
    if !clicked {
        eprintln!("Test Failed: no Sign in link on the YouTube home page");
        return Ok(false);
    }
    page.wait_for_navigation().await?;

    page.wait_for_selector("#identifierId").await?;
    page.type_text("#identifierId", INVALID_EMAIL).await?;
    page.click_by_text("button", "Next").await?;
    tokio::time::sleep(Duration::from_secs(1)).await;

    if page.text_visible(ERROR_SELECTOR, ERROR_TEXT).await? {
        println!("Error message correctly displayed.");
        Ok(true)
    } else {
        eprintln!("Test Failed");
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
