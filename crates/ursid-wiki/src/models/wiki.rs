//! MediaWiki action API payloads and the proxy's reshaped responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `action=parse&prop=wikitext`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub parse: Option<ParseBody>,
}

/// The `parse` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseBody {
    #[serde(default)]
    pub wikitext: Option<Wikitext>,
}

/// The `wikitext` object; the content lives under the `*` key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wikitext {
    #[serde(rename = "*", default)]
    pub content: Option<String>,
}

impl ParseResponse {
    /// The raw wikitext, if the response has the expected shape.
    #[must_use]
    pub fn into_wikitext(self) -> Option<String> {
        self.parse?.wikitext?.content
    }
}

/// Response of `action=query&prop=imageinfo&iiprop=url`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageQueryResponse {
    pub query: ImageQuery,
}

/// The `query` object: pages keyed by page id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub pages: BTreeMap<String, ImagePage>,
}

/// One page entry. Missing files have no `imageinfo`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagePage {
    #[serde(default)]
    pub imageinfo: Vec<ImageInfo>,
}

/// One image revision.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageInfo {
    #[serde(default)]
    pub url: Option<String>,
}

impl ImageQueryResponse {
    /// URL of the first image-info entry of the first page.
    ///
    /// A single title is queried, so only one page is expected.
    #[must_use]
    pub fn first_image_url(&self) -> Option<&str> {
        self.query
            .pages
            .values()
            .next()?
            .imageinfo
            .first()?
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// Body of the proxy's `/api/bear-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearDataResponse {
    pub wikitext: String,
}

/// Body of the proxy's `/api/bear-image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BearImageResponse {
    pub image_url: String,
}
