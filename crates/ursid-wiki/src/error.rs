//! Error types for the bear scraper.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Only the raw wikitext fetch has a propagating error; row extraction and image
//! resolution degrade to omissions and placeholders instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the server
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The response parsed but lacks the field we need.
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// The raw bear data could not be obtained.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    /// Upstream failed or answered with an unexpected shape.
    #[error("Bear data unavailable: {reason}")]
    Unavailable {
        /// What went wrong upstream
        reason: String,
    },
}

impl DataError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }

    /// Message shown in place of the bear list.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Unavailable { reason } if reason.is_empty() => {
                "Failed to fetch valid wikitext".to_string()
            }
            Self::Unavailable { reason } => reason.clone(),
        }
    }
}

impl From<ClientError> for DataError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingField(_) => Self::unavailable("Failed to fetch valid wikitext"),
            other => Self::unavailable(format!("Failed to fetch: {other}")),
        }
    }
}

/// Errors returned by the backend proxy routes.
#[derive(thiserror::Error, Debug)]
pub enum ProxyError {
    /// A required query parameter was absent or empty.
    #[error("Missing {0}.")]
    MissingParameter(&'static str),

    /// Upstream answered but had nothing for us.
    #[error("{0}")]
    NotFound(&'static str),

    /// Upstream answered with an unusable payload.
    #[error("{0}")]
    Upstream(&'static str),

    /// Upstream could not be reached.
    #[error("Internal server error.")]
    Internal(#[from] ClientError),

    /// A comment failed validation.
    #[error(transparent)]
    Comment(#[from] CommentError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingParameter(_) | Self::Comment(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let Self::Internal(err) = &self {
            tracing::error!(error = %err, "Upstream request failed");
        }

        (status, self.to_string()).into_response()
    }
}

/// Rejected comment submissions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentError {
    /// Both fields were blank.
    #[error("Name and comment may not be empty!")]
    BothEmpty,

    /// The name was blank.
    #[error("Please enter your name.")]
    NameEmpty,

    /// The comment was blank.
    #[error("Please enter a comment.")]
    CommentEmpty,
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for proxy route handlers.
pub type ProxyResult<T> = Result<T, ProxyError>;
