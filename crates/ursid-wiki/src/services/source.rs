//! Wikitext sources: straight from MediaWiki, or through the backend proxy.

use async_trait::async_trait;

use super::WikitextSource;
use crate::client::{ProxyClient, WikiClient};
use crate::config::Config;
use crate::error::DataError;

/// Fetches the species section straight from MediaWiki.
#[derive(Debug, Clone)]
pub struct DirectSource {
    client: WikiClient,
    page: String,
    section: u32,
}

impl DirectSource {
    /// Create a source for the page and section named in `config`.
    #[must_use]
    pub fn new(client: WikiClient, config: &Config) -> Self {
        Self { client, page: config.page_title.clone(), section: config.section }
    }
}

#[async_trait]
impl WikitextSource for DirectSource {
    async fn fetch_wikitext(&self) -> Result<String, DataError> {
        self.client.fetch_wikitext(&self.page, self.section).await.map_err(|e| {
            tracing::error!(page = %self.page, section = self.section, error = %e, "Error fetching bear data");
            DataError::from(e)
        })
    }
}

/// Fetches the species section through the backend proxy.
#[derive(Debug, Clone)]
pub struct ProxySource {
    client: ProxyClient,
}

impl ProxySource {
    /// Create a source backed by `client`.
    #[must_use]
    pub const fn new(client: ProxyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WikitextSource for ProxySource {
    async fn fetch_wikitext(&self) -> Result<String, DataError> {
        self.client.bear_data().await.map_err(|e| {
            tracing::error!(error = %e, "Error fetching bear data through proxy");
            DataError::from(e)
        })
    }
}
