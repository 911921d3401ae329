pub mod browser;
pub mod collector;
pub mod config;
pub mod element;
pub mod error;
pub mod feed;
pub mod order;
pub mod page;

pub use browser::BrowserSession;
pub use collector::{collect, CollectionError, Item, PagedSource, DEFAULT_TARGET_COUNT};
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use page::Page;
