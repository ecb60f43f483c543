//! Response sanitization pipeline
//!
//! The raw text coming back from the team agent interleaves prose,
//! framework artifacts, markdown/HTML tables, and a news section. The
//! pipeline separates those into renderable pieces:
//!
//! 1. [`strip_metadata`] removes framework-internal artifacts
//! 2. [`trim_preamble`] removes boilerplate lead-in phrases
//! 3. [`extract_tables`] pulls tables out of the running text
//! 4. [`extract_news`] pulls the news section out as a bullet list
//!
//! Every stage consumes and returns a revised string; nothing is mutated
//! in place and all entities live within a single turn.

pub mod metadata;
pub mod news;
pub mod preamble;
pub mod table;

pub use metadata::strip_metadata;
pub use news::{MAX_NEWS_ITEMS, NewsSection, extract_news};
pub use preamble::trim_preamble;
pub use table::{Table, TableExtraction, TableOutcome, extract_tables};

/// Run the string-to-string cleaning stages (metadata strip + preamble trim)
///
/// This is the combined cleanup applied before table extraction, and again
/// on the residual prose afterward.
pub fn clean_response(text: &str) -> String {
    trim_preamble(&strip_metadata(text))
}
