//! MediaWiki API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Bounded request and connect timeouts
//! - Status code mapping into [`ClientError`]
//!
//! There is deliberately no retry or cache layer: every call hits upstream once.

mod proxy;

pub use proxy::ProxyClient;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{ImageQueryResponse, ParseResponse};
use crate::services::AvailabilityChecker;

/// MediaWiki action API client.
#[derive(Clone)]
pub struct WikiClient {
    /// HTTP client.
    client: Client,

    /// Action API endpoint.
    api_url: String,
}

impl WikiClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = build_http_client(config)?;

        Ok(Self { client, api_url: config.wiki_api_url.clone() })
    }

    /// Action API endpoint this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the raw wikitext of one page section.
    ///
    /// # Errors
    ///
    /// Returns error on API failure, or [`ClientError::MissingField`] when the
    /// response has no `parse.wikitext["*"]`.
    pub async fn fetch_wikitext(&self, page: &str, section: u32) -> ClientResult<String> {
        let params = vec![
            ("action".to_string(), "parse".to_string()),
            ("page".to_string(), page.to_string()),
            ("prop".to_string(), "wikitext".to_string()),
            ("section".to_string(), section.to_string()),
            ("format".to_string(), "json".to_string()),
            ("origin".to_string(), "*".to_string()),
        ];

        let response: ParseResponse = self.get(&params).await?;
        response.into_wikitext().ok_or(ClientError::MissingField("parse.wikitext.*"))
    }

    /// Look up the URL of `File:<file_name>`.
    ///
    /// Returns `None` when the file has no image info.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or an unparsable response.
    pub async fn lookup_image_url(&self, file_name: &str) -> ClientResult<Option<String>> {
        let params = vec![
            ("action".to_string(), "query".to_string()),
            ("titles".to_string(), format!("File:{file_name}")),
            ("prop".to_string(), "imageinfo".to_string()),
            ("iiprop".to_string(), "url".to_string()),
            ("format".to_string(), "json".to_string()),
            ("origin".to_string(), "*".to_string()),
        ];

        let response: ImageQueryResponse = self.get(&params).await?;
        Ok(response.first_image_url().map(str::to_string))
    }

    /// Probe `url` and report whether it answers with a success status.
    ///
    /// Never fails: transport errors and invalid URLs count as unavailable.
    pub async fn probe(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    tracing::debug!(url, status = response.status().as_u16(), "Image not available");
                }
                ok
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Error occurred while checking image availability");
                false
            }
        }
    }

    /// Make a GET request against the action API.
    async fn get<T>(&self, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(&self.api_url).query(params).send().await?;

        let response = handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        serde_json::from_value(value).map_err(ClientError::from)
    }
}

#[async_trait]
impl AvailabilityChecker for WikiClient {
    async fn is_available(&self, url: &str) -> bool {
        self.probe(url).await
    }
}

impl std::fmt::Debug for WikiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiClient").field("api_url", &self.api_url).finish()
    }
}

/// Build the pooled reqwest client shared by the wiki and proxy clients.
pub(crate) fn build_http_client(config: &Config) -> anyhow::Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("ursid-wiki/", env!("CARGO_PKG_VERSION")))
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(api::MAX_KEEPALIVE)
        .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
        .gzip(true)
        .build()?;

    Ok(client)
}

/// Map non-success status codes into [`ClientError`].
pub(crate) async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    match status.as_u16() {
        404 => Err(ClientError::not_found(text)),
        400 => Err(ClientError::bad_request(text)),
        500..=599 => Err(ClientError::server(status.as_u16(), text)),
        _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
    }
}
