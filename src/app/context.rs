use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{MarqueeError, Result};
use crate::config::Config;
use crate::crawler::Crawler;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::scraper::PatternListingParser;

/// Shared wiring for every command: configuration plus the fetch and
/// parse components built from it.
pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
    pub crawler: Crawler,
}

impl AppContext {
    /// Build a context from the config file at `config_path`, or from the
    /// default location (creating a commented default file) when `None`.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = Config::load(config_path.as_deref())
            .map_err(|e| MarqueeError::Config(e.to_string()))?;
        Self::with_config(config)
    }

    /// Build a context from an already-loaded configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.site.validate()?;

        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::new(&config.site));
        let parser = Arc::new(PatternListingParser::new(&config.site));
        let crawler = Crawler::new(fetcher.clone(), parser, config.site.clone());
        let normalizer = Normalizer::new();

        Ok(Self {
            config,
            fetcher,
            normalizer,
            crawler,
        })
    }

    /// Resolve the username a command should act on: an explicit argument
    /// wins, otherwise the configured default.
    pub fn resolve_username(&self, arg: Option<&str>) -> Result<String> {
        arg.map(str::to_string)
            .or_else(|| self.config.username.clone())
            .ok_or_else(|| {
                MarqueeError::Config(
                    "No username given and none configured (set `username` in the config file)"
                        .into(),
                )
            })
    }
}
