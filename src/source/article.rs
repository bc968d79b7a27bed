//! The article types decoded from the feed.
//!
//! Field names follow the wire format (`publishedAt`, `urlToImage`), and the
//! structs serialize back to the same shape.
//!
//! ## For contributors
//!
//! Required string fields reject a *missing* key but accept `null`, which is
//! read as the empty string.  Real feeds routinely send `"author": null`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::FeedError;

/// Exact timestamp shape used by the feed, always UTC.
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The publisher of an article.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Publisher slug; many feeds leave it out or send `null`.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
}

/// A single news item.
///
/// There is no identity beyond structural equality; duplicates are kept.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    /// Raw timestamp, parsed on demand by [`Article::published_at`].
    #[serde(deserialize_with = "null_as_empty")]
    pub published_at: String,
    pub source: ArticleSource,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    /// Link to the full story.  Rewritten in place by
    /// [`Article::normalize_url`] before it is opened.
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub url_to_image: String,
}

/// One decoded payload.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeedResult {
    pub articles: Vec<Article>,
    /// Passed through as-is; never validated.
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
}

impl Article {
    /// Parse [`published_at`](Article::published_at) as a UTC timestamp.
    pub fn published_at(&self) -> Result<DateTime<Utc>, FeedError> {
        NaiveDateTime::parse_from_str(&self.published_at, PUBLISHED_AT_FORMAT)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|_| FeedError::ParseDate(self.published_at.clone()))
    }

    /// Prefix `http://` when the url carries no scheme, and return the
    /// resulting url.
    pub fn normalize_url(&mut self) -> &str {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            self.url = format!("http://{}", self.url);
        }
        &self.url
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
