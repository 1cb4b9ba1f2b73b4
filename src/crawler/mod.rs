//! Sequential pagination over film collections.
//!
//! Listing pages are walked in order starting at page 1 until the listing
//! ends, a request fails, or the collection's page ceiling is hit. The walk
//! never fails outright: whatever was collected before a failed request is
//! returned together with the [`Termination`] reason.
//!
//! # Usage
//!
//! ```rust,ignore
//! use marquee::crawler::{Crawler, ListingKind};
//!
//! let crawler = Crawler::new(fetcher, parser, site);
//! let crawl = crawler.crawl("someuser", ListingKind::Films).await;
//! println!("{} films ({:?})", crawl.films.len(), crawl.termination);
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::domain::Film;
use crate::fetcher::Fetcher;
use crate::scraper::ListingParser;

/// Collections exposed as paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    /// Every film the member has logged.
    Films,
    /// Films the member plans to watch.
    Watchlist,
}

impl ListingKind {
    /// URL path segment for this collection.
    pub fn segment(&self) -> &'static str {
        match self {
            ListingKind::Films => "films",
            ListingKind::Watchlist => "watchlist",
        }
    }

    fn page_ceiling(&self, site: &SiteConfig) -> u32 {
        match self {
            ListingKind::Films => site.films_page_ceiling,
            ListingKind::Watchlist => site.watchlist_page_ceiling,
        }
    }
}

/// Why a crawl stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A page came back with no entries; the whole listing was seen.
    EndOfListing,
    /// A page request failed; earlier pages are kept.
    FetchFailed,
    /// The page ceiling was reached before the listing ran out.
    PageCeiling,
}

/// Outcome of walking one collection.
#[derive(Debug, Clone)]
pub struct Crawl {
    /// Films in listing order across all visited pages.
    pub films: Vec<Film>,
    /// Why the walk stopped.
    pub termination: Termination,
}

impl Crawl {
    /// Whether the listing was exhausted rather than cut short.
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::EndOfListing
    }
}

/// Walks a paginated collection page by page.
pub struct Crawler {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    parser: Arc<dyn ListingParser>,
    site: SiteConfig,
}

impl Crawler {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        parser: Arc<dyn ListingParser>,
        site: SiteConfig,
    ) -> Self {
        Self {
            fetcher,
            parser,
            site,
        }
    }

    /// Collect every film in `username`'s listing of the given kind.
    ///
    /// Pages are requested one at a time. The first empty page marks the
    /// end of the listing; a failed request stops the walk and keeps the
    /// films collected so far.
    pub async fn crawl(&self, username: &str, kind: ListingKind) -> Crawl {
        let ceiling = kind.page_ceiling(&self.site);
        let mut films = Vec::new();

        for page in 1..=ceiling {
            let url = self.site.listing_url(username, kind.segment(), page);
            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to fetch {}: {}", url, e);
                    return Crawl {
                        films,
                        termination: Termination::FetchFailed,
                    };
                }
            };

            let page_films = self.parser.parse_page(&body);
            if page_films.is_empty() {
                info!(
                    "{} listing ended at page {}, {} films collected",
                    kind.segment(),
                    page,
                    films.len()
                );
                return Crawl {
                    films,
                    termination: Termination::EndOfListing,
                };
            }

            debug!(
                "Page {} of {}: {} films",
                page,
                kind.segment(),
                page_films.len()
            );
            films.extend(page_films);
        }

        warn!(
            "Stopped {} crawl at page ceiling {}",
            kind.segment(),
            ceiling
        );
        Crawl {
            films,
            termination: Termination::PageCeiling,
        }
    }
}
