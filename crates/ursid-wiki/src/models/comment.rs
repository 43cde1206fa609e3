//! Visitor comments.

use serde::{Deserialize, Serialize};

/// A comment left under the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Who wrote it.
    pub name: String,

    /// What they wrote.
    pub comment: String,
}

impl Comment {
    /// Create a comment.
    #[must_use]
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self { name: name.into(), comment: comment.into() }
    }
}

/// Body of `POST /api/comments`. Absent fields read as blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentInput {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub comment: String,
}

/// Show/hide state of the comment board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentVisibility {
    pub visible: bool,
    pub label: String,
}
