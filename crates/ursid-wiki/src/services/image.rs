//! Image resolution with availability-checked fallback.

use async_trait::async_trait;

use super::{AvailabilityChecker, ImageResolver};
use crate::client::{ProxyClient, WikiClient};
use crate::config::Config;
use crate::error::ClientResult;

/// Resolves images by querying MediaWiki directly.
#[derive(Debug, Clone)]
pub struct WikiImageResolver<C> {
    client: WikiClient,
    checker: C,
    placeholder: String,
}

impl<C: AvailabilityChecker> WikiImageResolver<C> {
    /// Create a resolver that looks up through `client` and verifies through `checker`.
    #[must_use]
    pub fn new(client: WikiClient, checker: C, config: &Config) -> Self {
        Self { client, checker, placeholder: config.placeholder_image.clone() }
    }
}

#[async_trait]
impl<C: AvailabilityChecker> ImageResolver for WikiImageResolver<C> {
    async fn resolve(&self, file_name: &str) -> String {
        let found = self.client.lookup_image_url(file_name).await;
        settle(found, &self.checker, file_name, &self.placeholder).await
    }
}

/// Resolves images through the backend proxy's `/api/bear-image`.
#[derive(Debug, Clone)]
pub struct ProxyImageResolver<C> {
    client: ProxyClient,
    checker: C,
    placeholder: String,
}

impl<C: AvailabilityChecker> ProxyImageResolver<C> {
    /// Create a resolver that looks up through the proxy and verifies through `checker`.
    #[must_use]
    pub fn new(client: ProxyClient, checker: C, config: &Config) -> Self {
        Self { client, checker, placeholder: config.placeholder_image.clone() }
    }
}

#[async_trait]
impl<C: AvailabilityChecker> ImageResolver for ProxyImageResolver<C> {
    async fn resolve(&self, file_name: &str) -> String {
        let found = self.client.bear_image(file_name).await;
        settle(found, &self.checker, file_name, &self.placeholder).await
    }
}

/// Turn a lookup outcome into a URL. The checker only sees URLs that were found.
async fn settle<C>(
    found: ClientResult<Option<String>>,
    checker: &C,
    file_name: &str,
    placeholder: &str,
) -> String
where
    C: AvailabilityChecker + ?Sized,
{
    match found {
        Ok(Some(url)) => {
            if checker.is_available(&url).await {
                url
            } else {
                tracing::warn!(file = file_name, url = %url, "Image unavailable, using placeholder");
                placeholder.to_string()
            }
        }
        Ok(None) => {
            tracing::debug!(file = file_name, "No image info, using placeholder");
            placeholder.to_string()
        }
        Err(e) => {
            tracing::warn!(file = file_name, error = %e, "Error fetching image URL");
            placeholder.to_string()
        }
    }
}
