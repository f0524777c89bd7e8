//! Error types for PMLB client operations

use thiserror::Error;

/// Result type for PMLB client operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching or decoding PMLB data
///
/// Every variant carries the URL or row position it arose from, so a
/// caller can report failures without extra bookkeeping. Errors are never
/// retried or recovered internally.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed (TLS backend init)
    #[error("Failed to create HTTP client: {source}")]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },

    /// Transport-level failure before a response was received
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// The response body was not a valid gzip stream
    #[error("Failed to decompress {url}: {source}")]
    Decompression {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading an otherwise-valid response stream failed
    #[error("Failed to read response body from {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A data row is too short for the requested feature/label split
    #[error("Row {line} has {fields} field(s), need at least 2")]
    MalformedRow { line: usize, fields: usize },
}

impl FetchError {
    /// HTTP status code, when the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check whether the server reported the resource missing (HTTP 404),
    /// the usual signal that no dataset of the requested name exists
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
