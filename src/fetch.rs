//! HTTP document fetching.
//!
//! The pipeline talks to the network through the [`DocumentSource`] trait so
//! tests can substitute a canned source. [`HttpSource`] is the production
//! implementation: one `reqwest` client, the configured User-Agent, and a
//! uniform timeout on every request. A failed fetch is reported, never
//! retried; the caller decides whether it is fatal.

use crate::config::FeedConfig;
use crate::error::FetchError;
use reqwest::Client;
use tracing::{debug, instrument};

/// Capability to fetch a raw document by URL.
pub trait DocumentSource {
    /// Perform a single bounded-time GET and return the response body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`DocumentSource`] backed by a real HTTP client.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Build the client with the run's User-Agent and timeout.
    pub fn new(config: &FeedConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), "Fetched document");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_builds_from_default_config() {
        let config = FeedConfig::default();
        assert!(HttpSource::new(&config).is_ok());
    }
}
