//! # Marquee
//!
//! A command-line fetcher for a member's film history on a
//! Letterboxd-style movie-logging site.
//!
//! ## Architecture
//!
//! Marquee follows a modular pipeline architecture:
//!
//! ```text
//! Fetcher → Normalizer (RSS feed)    → Film records → Report
//! Fetcher → Crawler → ListingParser  → Film records → Report
//! ```
//!
//! - [`fetcher`]: HTTP client with a browser user agent and timeout
//! - [`normalizer`]: Converts the member's RSS feed into [`Film`](domain::Film) records
//! - [`crawler`]: Walks paginated listings (films, watchlist) page by page
//! - [`scraper`]: Extracts film entries from listing-page markup
//!
//! ## Quick Start
//!
//! ```bash
//! # Recent diary entries
//! marquee recent someuser
//!
//! # Every logged film
//! marquee films someuser
//!
//! # Watchlist
//! marquee watchlist someuser
//!
//! # Combined report, as JSON
//! marquee report someuser --json
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Config file loading and site parameters
//! - [`crawler`]: Pagination over film collections
//! - [`domain`]: The [`Film`](domain::Film) record
//! - [`fetcher`]: HTTP fetching
//! - [`normalizer`]: Feed parsing into film records
//! - [`scraper`]: Listing-page parsing

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// config, fetcher, normalizer, crawler.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `recent [username]` - Most recent diary entries
/// - `films [username]` - Every logged film
/// - `watchlist [username]` - The watchlist
/// - `report [username]` - All of the above in one report
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/marquee/config.toml`, supporting:
/// - A default username
/// - Site parameters (origin, user agent, timeout, page ceilings)
/// - Report limits
pub mod config;

/// Pagination over film collections.
///
/// - [`Crawler`](crawler::Crawler): Walks a listing page by page
/// - [`ListingKind`](crawler::ListingKind): Films or watchlist
/// - [`Crawl`](crawler::Crawl): Collected films plus the [`Termination`](crawler::Termination) reason
pub mod crawler;

/// Core domain model.
///
/// - [`Film`](domain::Film): One film with optional year, rating,
///   watch date, and link, plus a rewatch flag
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed parsing and normalization.
///
/// Converts the member's RSS feed into [`Film`](domain::Film) records,
/// splitting titles from years and mining ratings, rewatch markers, and
/// watch dates out of entry descriptions.
pub mod normalizer;

/// Listing-page parsing.
///
/// - [`ListingParser`](scraper::ListingParser): Trait for extracting films from markup
/// - [`PatternListingParser`](scraper::PatternListingParser): Regex-based implementation
pub mod scraper;
