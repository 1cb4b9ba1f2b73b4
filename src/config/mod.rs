//! Configuration management for marquee.
//!
//! Configuration is read from `~/.config/marquee/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Every constant the pipeline needs (site origin, user agent,
//! timeout, page ceilings, report limits) lives here so operations can be
//! pointed at a different origin, mock servers included.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::app::{MarqueeError, Result};

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default account to fetch when the command line names none.
    pub username: Option<String>,
    pub site: SiteConfig,
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            site: SiteConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Where and how the site is fetched.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin all feed and listing URLs are built from.
    pub origin: String,

    /// User-Agent header value; the site rejects default client strings.
    pub user_agent: String,

    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,

    /// Hard page cap for the all-films listing (default: 50).
    pub films_page_ceiling: u32,

    /// Hard page cap for the watchlist listing (default: 20).
    pub watchlist_page_ceiling: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://letterboxd.com".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 30,
            films_page_ceiling: 50,
            watchlist_page_ceiling: 20,
        }
    }
}

impl SiteConfig {
    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Origin with any trailing slash removed, ready for path composition.
    pub fn origin_base(&self) -> &str {
        self.origin.trim_end_matches('/')
    }

    /// URL of a user's RSS feed: `<origin>/<username>/rss/`.
    pub fn feed_url(&self, username: &str) -> String {
        format!("{}/{}/rss/", self.origin_base(), username)
    }

    /// URL of one page of a paginated listing:
    /// `<origin>/<username>/<segment>/page/<page>/`.
    pub fn listing_url(&self, username: &str, segment: &str, page: u32) -> String {
        format!(
            "{}/{}/{}/page/{}/",
            self.origin_base(),
            username,
            segment,
            page
        )
    }

    /// Check that the origin is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.origin)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(MarqueeError::Config(format!(
                "site origin must be an http(s) URL: {}",
                self.origin
            )));
        }
        Ok(())
    }
}

/// How much of each section the text report shows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Entries shown in the recent-activity section (default: 10).
    pub recent_limit: usize,

    /// Entries previewed in the films and watchlist sections (default: 5).
    pub preview_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recent_limit: 10,
            preview_limit: 5,
        }
    }
}

impl Config {
    /// Load configuration from the given path, or from the default path.
    ///
    /// With an explicit path the file must exist and parse. With the
    /// default path a missing file is created with commented defaults
    /// first. Missing fields in the file use default values.
    pub fn load(path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let config_path = Self::default_config_path()?;
                if !config_path.exists() {
                    Self::create_default_config(&config_path)?;
                    return Ok(Self::default());
                }
                Self::load_from(&config_path)
            }
        }
    }

    fn load_from(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/marquee/config.toml`.
    pub fn default_config_path() -> std::result::Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("marquee").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> std::result::Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Marquee configuration
#
# Default account to fetch when the command line names none.
# username = "yourname"

[site]
# Origin all feed and listing URLs are built from.
origin = "https://letterboxd.com"

# Sent as the User-Agent header; the site rejects default client strings.
user_agent = "Mozilla/5.0"

# Per-request timeout in seconds.
timeout_secs = 30

# Hard page caps for the two paginated listings.
films_page_ceiling = 50
watchlist_page_ceiling = 20

[report]
# Entries shown in the recent-activity section.
recent_limit = 10

# Entries previewed in the films and watchlist sections.
preview_limit = 5
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
