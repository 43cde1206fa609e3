//! Data models for bear records and MediaWiki responses.
//!
//! Wire models use `#[serde(default)]` for optional fields so that an
//! unexpected upstream shape surfaces as a missing value, not a panic.

mod bear;
mod comment;
mod wiki;

pub use bear::{BearRecord, RawRow};
pub use comment::{Comment, CommentInput, CommentVisibility};
pub use wiki::{
    BearDataResponse, BearImageResponse, ImageInfo, ImagePage, ImageQuery, ImageQueryResponse,
    ParseBody, ParseResponse, Wikitext,
};
