use crate::collector::{Item, PagedSource};
use crate::error::Result;
use crate::page::Page;

/// The Hacker News "newest" listing.
pub const NEWEST_URL: &str = "https://news.ycombinator.com/newest";

/// One `<tr class="athing">` per article; the row after it holds the age cell.
const ROW_SELECTOR: &str = ".athing";
/// The "More" link that loads the next page of articles.
const MORE_SELECTOR: &str = ".morelink";

/// Pulls the id and the age cell's `title` timestamp for every article row.
/// The timestamp lives on the row *after* each `.athing`, which CSS cannot
/// reach from the row itself, so the pairing is done in the page.
const EXTRACT_ITEMS_JS: &str = r#"
    JSON.stringify(
        Array.from(document.querySelectorAll('.athing')).map(row => {
            const age = row.nextElementSibling
                ? row.nextElementSibling.querySelector('.age')
                : null;
            return {
                id: row.id,
                timestamp: age ? (age.getAttribute('title') || '') : ''
            };
        })
    )
"#;

/// A [`PagedSource`] over the Hacker News newest-articles listing.
pub struct NewestFeed<'a> {
    page: &'a Page,
}

impl<'a> NewestFeed<'a> {
    /// Attach to a page already navigated to the newest listing, waiting for
    /// the first article rows to render.
    pub async fn attach(page: &'a Page) -> Result<NewestFeed<'a>> {
        page.wait_for_selector(ROW_SELECTOR).await?;
        Ok(Self { page })
    }
}

impl PagedSource for NewestFeed<'_> {
    async fn has_more(&self) -> Result<bool> {
        self.page.is_visible(MORE_SELECTOR).await
    }

    async fn page_items(&self) -> Result<Vec<Item>> {
        self.page.extract(EXTRACT_ITEMS_JS).await
    }

    async fn advance(&mut self) -> Result<()> {
        self.page.click(MORE_SELECTOR).await?;
        self.page.wait_for_navigation().await?;
        self.page.wait_for_selector(ROW_SELECTOR).await?;
        Ok(())
    }
}
