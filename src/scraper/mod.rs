//! Listing-page parsing for paginated film collections.
//!
//! Collection pages (films, watchlist) have no feed representation, so
//! their markup is mined directly. The extraction strategy lives behind
//! [`ListingParser`] so the pattern-based implementation can be replaced
//! by a structured HTML walk without touching the crawler.
//!
//! # Architecture
//!
//! ```text
//! Listing HTML → ListingParser → Vec<Film> (title + link only)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use marquee::config::SiteConfig;
//! use marquee::scraper::{ListingParser, PatternListingParser};
//!
//! let parser = PatternListingParser::new(&SiteConfig::default());
//! let films = parser.parse_page(&html);
//! ```

mod pattern;

pub use pattern::PatternListingParser;

use crate::domain::Film;

/// Extracts film entries from one page of listing markup.
pub trait ListingParser: Send + Sync {
    /// Parse a single listing page.
    ///
    /// Extraction is best-effort: constructs that do not match the
    /// expected shape are skipped, and a page with no recognizable
    /// entries yields an empty vector. An empty page is the crawler's
    /// end-of-listing signal, never an error.
    fn parse_page(&self, html: &str) -> Vec<Film>;
}
