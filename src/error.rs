//! Error types for the fetch layer.
//!
//! A failed request and a non-success status are kept as separate variants
//! for diagnostics, but callers treat them the same way: fatal for the
//! listing page, recoverable for an individual article page.

use reqwest::StatusCode;

/// Failure of a single HTTP fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed (transport error, timeout, DNS).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
}

impl FetchError {
    /// The URL the failed fetch was aimed at.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } => url,
            FetchError::Status { url, .. } => url,
        }
    }
}
