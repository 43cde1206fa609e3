//! Configuration for the bear scraper and its proxy.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// MediaWiki action API for English Wikipedia.
    pub const WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

    /// Page holding the species tables.
    pub const PAGE_TITLE: &str = "List_of_ursids";

    /// Section of [`PAGE_TITLE`] that contains the species tables.
    pub const WIKITEXT_SECTION: u32 = 3;

    /// Local asset shown when no verified image exists.
    pub const PLACEHOLDER_IMAGE: &str = "media/placeholder.png";

    /// Range shown when the wikitext range field is empty.
    pub const RANGE_DEFAULT: &str = "Unknown";

    /// Port the backend proxy listens on.
    pub const PROXY_PORT: u16 = 3000;

    /// Request timeout. Upstream hangs otherwise stall a whole table.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Markers of the `{{Species table}}` template family.
pub mod wikitext {
    /// Closes one species table.
    pub const TABLE_END: &str = "{{Species table/end}}";

    /// Opens one species row.
    pub const ROW_START: &str = "{{Species table/row";
}

/// Scraper configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// MediaWiki API endpoint (overridable for mock servers).
    pub wiki_api_url: String,

    /// Base URL of the backend proxy, when the wiki is reached through it.
    pub proxy_url: Option<String>,

    /// Page holding the species tables.
    pub page_title: String,

    /// Section index of the species tables.
    pub section: u32,

    /// Image used when resolution fails.
    pub placeholder_image: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create the default configuration pointing at English Wikipedia.
    #[must_use]
    pub fn new() -> Self {
        Self {
            wiki_api_url: api::WIKI_API_URL.to_string(),
            proxy_url: None,
            page_title: api::PAGE_TITLE.to_string(),
            section: api::WIKITEXT_SECTION,
            placeholder_image: api::PLACEHOLDER_IMAGE.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with a mock MediaWiki endpoint.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            wiki_api_url: format!("{}/w/api.php", base_url),
            proxy_url: None,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new()
        }
    }

    /// Use the backend proxy at `base_url` instead of calling MediaWiki directly.
    #[must_use]
    pub fn with_proxy(mut self, base_url: impl Into<String>) -> Self {
        self.proxy_url = Some(base_url.into());
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `WIKI_API_URL`, `URSID_PROXY_URL`, `URSID_PAGE_TITLE` and
    /// `URSID_SECTION`; anything unset keeps its default.
    ///
    /// # Errors
    ///
    /// Returns error if `URSID_SECTION` is not a number, or if either URL
    /// does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("WIKI_API_URL") {
            config.wiki_api_url = checked_url("WIKI_API_URL", url)?;
        }
        config.proxy_url = std::env::var("URSID_PROXY_URL")
            .ok()
            .map(|url| checked_url("URSID_PROXY_URL", url))
            .transpose()?;
        if let Ok(title) = std::env::var("URSID_PAGE_TITLE") {
            config.page_title = title;
        }
        if let Ok(section) = std::env::var("URSID_SECTION") {
            config.section = section
                .parse()
                .with_context(|| format!("URSID_SECTION must be a number, got {section:?}"))?;
        }

        Ok(config)
    }

    /// Check if requests go through the backend proxy.
    #[must_use]
    pub const fn uses_proxy(&self) -> bool {
        self.proxy_url.is_some()
    }
}

fn checked_url(var: &str, value: String) -> anyhow::Result<String> {
    url::Url::parse(&value).with_context(|| format!("{var} is not a valid URL: {value:?}"))?;
    Ok(value)
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
