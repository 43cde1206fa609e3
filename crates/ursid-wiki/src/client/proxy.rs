//! Client for the backend proxy (`/api/bear-data`, `/api/bear-image`).

use reqwest::{Client, StatusCode};

use super::{build_http_client, handle_response};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{BearDataResponse, BearImageResponse};

/// Client for a running bear proxy.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    /// Create a client for the proxy at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(base_url: impl Into<String>, config: &Config) -> anyhow::Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client: build_http_client(config)?, base_url })
    }

    /// Fetch the species wikitext through the proxy.
    ///
    /// # Errors
    ///
    /// Returns error on a non-success status, or [`ClientError::MissingField`]
    /// when the body has no `wikitext`.
    pub async fn bear_data(&self) -> ClientResult<String> {
        let url = format!("{}/api/bear-data", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = handle_response(response).await?;

        let body: BearDataResponse =
            response.json().await.map_err(|_| ClientError::MissingField("wikitext"))?;
        Ok(body.wikitext)
    }

    /// Look up an image URL through the proxy.
    ///
    /// A 404 from the proxy means the file has no image and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns error on any other failure.
    pub async fn bear_image(&self, file_name: &str) -> ClientResult<Option<String>> {
        let url = format!("{}/api/bear-image", self.base_url);
        let response = self.client.get(&url).query(&[("fileName", file_name)]).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = handle_response(response).await?;
        let body: BearImageResponse = response.json().await?;

        Ok(Some(body.image_url).filter(|url| !url.is_empty()))
    }
}

impl std::fmt::Debug for ProxyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyClient").field("base_url", &self.base_url).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ProxyClient::new("http://localhost:3000/", &Config::default()).unwrap();
        assert_eq!(format!("{client:?}"), r#"ProxyClient { base_url: "http://localhost:3000" }"#);
    }
}
