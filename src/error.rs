//! Error types for the UserHub API client.
//!
//! Every failure an operation can produce is one variant of [`Error`].
//! Transport, status and parse failures reach the caller through the same
//! shared handler and can be told apart with [`Error::kind`].

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for UserHub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all UserHub API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Response body: parsed JSON, or the raw text as a JSON string
        body: Value,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response (connect, timeout, TLS...).
    Network,
    /// The backend answered with a non-success status.
    Status,
    /// The response body could not be decoded.
    Parse,
    /// Rejected locally before any request was sent.
    Local,
}

impl Error {
    /// Classify this error.
    ///
    /// # Example
    ///
    /// ```
    /// use userhub_rs::{Error, ErrorKind};
    ///
    /// let err = Error::InvalidInput("id must be non-zero".into());
    /// assert_eq!(err.kind(), ErrorKind::Local);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(e) if e.is_decode() => ErrorKind::Parse,
            Error::Http(_) => ErrorKind::Network,
            Error::Api { .. } => ErrorKind::Status,
            Error::Json(_) => ErrorKind::Parse,
            Error::InvalidInput(_) | Error::UrlParse(_) | Error::Config(_) => ErrorKind::Local,
        }
    }

    /// The message to surface to a caller: the backend's message for status
    /// failures, otherwise this error's display text.
    pub fn message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status code, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the backend reported 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, missing credentials, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Build a status error from a response body.
    ///
    /// The message comes from the body's `message` field, then its `error`
    /// field, then the raw text, then the canonical reason for the status.
    pub(crate) fn from_api_response(status: u16, text: &str) -> Self {
        let body = serde_json::from_str::<Value>(text)
            .unwrap_or_else(|_| Value::String(text.to_string()));

        let field = |name: &str| {
            body.get(name)
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .map(String::from)
        };

        let message = field("message")
            .or_else(|| field("error"))
            .or_else(|| {
                let trimmed = text.trim();
                (!trimmed.is_empty() && !body.is_object()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown API error")
                    .to_string()
            });

        Error::Api {
            status,
            message,
            body,
        }
    }
}
