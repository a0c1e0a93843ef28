//! Error types for the caselaw client.
//!
//! Every failure of a search is classified into one of a few explicit
//! variants so callers can tell a network problem from a malformed payload.

use thiserror::Error;

/// The unified error type for caselaw operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or no successful response came back.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be read to the end.
    #[error("failed to read response body: {0}")]
    BodyRead(#[from] BodyReadError),

    /// The response body was not a valid search response document.
    #[error("failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    /// Caller-supplied input was rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true for failures that happened on the wire rather than in
    /// decoding or validation. Body read failures count as transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::BodyRead(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established (DNS, refused, TLS handshake).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// The transport gave up waiting.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The API answered with a non-success status.
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// Any other HTTP client failure, including request construction.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
                detail: None,
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// The connection dropped or errored while the body was streaming in.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct BodyReadError {
    #[source]
    source: reqwest::Error,
}

impl BodyReadError {
    pub(crate) fn new(source: reqwest::Error) -> Self {
        Self { source }
    }
}

/// The body was read but is not a search response.
///
/// Keeps the raw body around so a caller can log what the API actually sent.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct DecodeError {
    #[source]
    source: serde_json::Error,
    body: String,
}

impl DecodeError {
    pub(crate) fn new(source: serde_json::Error, body: &[u8]) -> Self {
        Self {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// The raw response body, lossily converted to UTF-8.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Line of the body where decoding stopped.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// Column of the body where decoding stopped.
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// True if the body was not JSON at all, as opposed to JSON of the
    /// wrong shape.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self.source.classify(),
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof
        )
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API endpoint URL.
    #[error("invalid endpoint '{value}': {reason}")]
    Endpoint { value: String, reason: String },

    /// Invalid pagination cursor.
    #[error("invalid cursor '{value}': {reason}")]
    Cursor { value: String, reason: String },
}
