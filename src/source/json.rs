//! JSON feed source: one blocking HTTP GET, then [`decode`](super::decode).
//!
//! ## For contributors
//!
//! The status code is not inspected.  A non-2xx response is
//! logged, its body is read anyway, and whatever it contains goes through the
//! decoder; an error page therefore surfaces as [`FeedError::Decode`].

use std::net::TcpStream;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use super::{decode, DataSource, FeedError, FeedResult};

/// How long the connectivity pre-check waits for a TCP handshake.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// A feed served as a static JSON document over HTTP(S).
pub struct JsonFeedSource {
    /// The feed URL.
    pub url: Url,
    /// A human-readable label for logs and the status bar.
    pub label: String,
    client: Client,
}

impl JsonFeedSource {
    /// Create a new source.
    ///
    /// # Arguments
    ///
    /// * `url` — absolute URL of the JSON document.
    /// * `label` — short name displayed in the status bar.
    /// * `timeout` — total request timeout, covering connect and body read.
    pub fn new(url: Url, label: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(concat!("newsfeed/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            url,
            label: label.into(),
            client,
        })
    }

    /// Perform the GET and read the entire body into one string.
    ///
    /// The response owns the connection, so it is released on every path out
    /// of this function, including a failed body read.
    pub fn fetch_body(&self) -> Result<String, FeedError> {
        let response = self.client.get(self.url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "Feed returned non-success status, reading body anyway");
        }

        Ok(response.text()?)
    }
}

impl DataSource for JsonFeedSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn probe(&self) -> Result<(), FeedError> {
        let addrs = self
            .url
            .socket_addrs(|| None)
            .map_err(|e| FeedError::Offline(format!("cannot resolve {}: {e}", self.url)))?;

        let mut last_err = None;
        for addr in &addrs {
            match TcpStream::connect_timeout(addr, PROBE_TIMEOUT) {
                Ok(_) => return Ok(()),
                Err(e) => last_err = Some((addr, e)),
            }
        }

        Err(FeedError::Offline(match last_err {
            Some((addr, e)) => format!("cannot reach {addr}: {e}"),
            None => format!("no addresses for {}", self.url),
        }))
    }

    fn fetch(&self) -> Result<FeedResult, FeedError> {
        tracing::info!(url = %self.url, "Fetching feed");
        let body = self.fetch_body()?;
        tracing::debug!(bytes = body.len(), "Feed body read");

        let feed = decode(&body)?;
        tracing::info!(articles = feed.articles.len(), status = %feed.status, "Feed decoded");
        Ok(feed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
