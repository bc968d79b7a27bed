use thiserror::Error;

/// Errors produced by the fetch / decode / date-parsing pipeline.
///
/// The UI shows each variant differently, so "no internet", "server
/// unreachable" and "bad data" stay distinguishable.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connectivity pre-check failed; the fetch was never attempted.
    #[error("no internet connection ({0})")]
    Offline(String),
    /// DNS, connection, TLS, timeout or body-read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Malformed JSON or a missing required field.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// `publishedAt` is not a `yyyy-MM-ddTHH:mm:ssZ` timestamp.
    #[error("invalid publishedAt {0:?}")]
    ParseDate(String),
}
