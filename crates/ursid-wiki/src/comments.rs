//! In-memory comment board shown under the article.
//!
//! Nothing is persisted; a fresh board starts with the seed comment.

use crate::error::CommentError;
use crate::models::{Comment, CommentVisibility};

const SEED_NAME: &str = "Bob Fossil";
const SEED_COMMENT: &str = "Oh I am so glad you taught me all about the big brown angry guys in the woods. With their sniffing little noses and their bad attitudes, they can sure be a menace, I was thinking of putting them all in a truck and driving them outta here. I run a zoo, you know.";

/// Comments plus the show/hide toggle.
#[derive(Debug, Clone)]
pub struct CommentBoard {
    comments: Vec<Comment>,
    visible: bool,
}

impl CommentBoard {
    /// A visible board holding the seed comment.
    #[must_use]
    pub fn new() -> Self {
        Self { comments: vec![Comment::new(SEED_NAME, SEED_COMMENT)], visible: true }
    }

    /// Validate and append a comment.
    ///
    /// Fields are checked after trimming but stored as given.
    pub fn submit(&mut self, name: &str, comment: &str) -> Result<&Comment, CommentError> {
        validate(name, comment)?;

        self.comments.push(Comment::new(name, comment));
        tracing::debug!(count = self.comments.len(), "Comment added");

        Ok(&self.comments[self.comments.len() - 1])
    }

    /// All comments, oldest first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Flip between showing and hiding the form and comments.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Whether the form and comments are shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Label of the show/hide button.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.visible { "Hide comments" } else { "Show comments" }
    }

    /// Current show/hide state with its button label.
    #[must_use]
    pub fn visibility(&self) -> CommentVisibility {
        CommentVisibility { visible: self.is_visible(), label: self.toggle_label().to_string() }
    }
}

impl Default for CommentBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(name: &str, comment: &str) -> Result<(), CommentError> {
    match (is_blank(name), is_blank(comment)) {
        (true, true) => Err(CommentError::BothEmpty),
        (true, false) => Err(CommentError::NameEmpty),
        (false, true) => Err(CommentError::CommentEmpty),
        (false, false) => Ok(()),
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
