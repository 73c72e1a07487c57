/// Listing page -> interactive-data links.
pub mod index;

/// Interactive-data page -> Excel document link.
pub mod document;

/// Both stages, in order, with progress reporting.
pub mod pipeline;

pub use document::{resolve_all, resolve_document};
pub use index::resolve_index;
pub use pipeline::{resolve_financial_documents, Stage};

use crate::error::{Result, SpiderError};
use scraper::Selector;

// compile a CSS selector built from configuration
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| SpiderError::Parse(format!("selector `{css}`: {err:?}")))
}
