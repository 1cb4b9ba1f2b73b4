use async_trait::async_trait;
use reqwest::Client;

use crate::app::Result;
use crate::config::SiteConfig;
use crate::fetcher::Fetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(site: &SiteConfig) -> Self {
        let client = Client::builder()
            .timeout(site.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(site.user_agent.as_str())
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
