pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// A single retrieval of a URL as text.
///
/// Implementations fail on any transport-level condition (DNS failure,
/// timeout, non-2xx status, undecodable body) and never substitute partial
/// or empty content for an error. Callers decide whether a failure stops a
/// crawl or aborts the whole operation.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}
