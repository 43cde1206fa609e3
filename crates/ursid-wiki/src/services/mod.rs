//! The bear data pipeline.
//!
//! A [`WikitextSource`] produces the raw species tables, [`extract::extract_bears`]
//! turns them into records, and an [`ImageResolver`] attaches an image to each
//! record. Every network capability sits behind a trait so the pipeline can run
//! against fakes.

pub mod extract;
mod image;
mod source;

pub use extract::extract_bears;
pub use image::{ProxyImageResolver, WikiImageResolver};
pub use source::{DirectSource, ProxySource};

use async_trait::async_trait;

use crate::error::DataError;
use crate::models::BearRecord;

/// Reports whether a URL can be displayed.
///
/// Total: failures mean "not available".
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    /// Whether `url` answers with a success status.
    async fn is_available(&self, url: &str) -> bool;
}

/// Turns an image file token into a displayable URL.
///
/// Total: every path ends in either a verified URL or a placeholder.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    /// Resolve `file_name` (without the `File:` prefix).
    async fn resolve(&self, file_name: &str) -> String;
}

/// Supplies the raw species wikitext.
#[async_trait]
pub trait WikitextSource: Send + Sync {
    /// Fetch the wikitext once.
    async fn fetch_wikitext(&self) -> Result<String, DataError>;
}

#[async_trait]
impl<T: AvailabilityChecker + ?Sized> AvailabilityChecker for std::sync::Arc<T> {
    async fn is_available(&self, url: &str) -> bool {
        (**self).is_available(url).await
    }
}

#[async_trait]
impl<T: ImageResolver + ?Sized> ImageResolver for std::sync::Arc<T> {
    async fn resolve(&self, file_name: &str) -> String {
        (**self).resolve(file_name).await
    }
}

/// Loads the bear list: fetch, then extract.
///
/// Each call is a fresh computation; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct BearService<S, R> {
    source: S,
    resolver: R,
}

impl<S: WikitextSource, R: ImageResolver> BearService<S, R> {
    /// Create a service from a source and a resolver.
    #[must_use]
    pub const fn new(source: S, resolver: R) -> Self {
        Self { source, resolver }
    }

    /// Fetch the wikitext and extract every complete species row.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Unavailable`] when the wikitext fetch fails. Row and
    /// image failures never surface here.
    pub async fn load_bears(&self) -> Result<Vec<BearRecord>, DataError> {
        let wikitext = self.source.fetch_wikitext().await?;
        let bears = extract_bears(&wikitext, &self.resolver).await;

        tracing::info!(count = bears.len(), "Loaded bear species");
        Ok(bears)
    }
}
