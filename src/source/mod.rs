//! Feed source abstraction layer.
//!
//! This module defines the [`DataSource`] trait, the article types shared by
//! the rest of the application, and the [`decode`] step that turns a raw
//! payload into a [`FeedResult`].  The concrete HTTP implementation lives in
//! [`json`].
//!
//! ## For contributors — adding a new source
//!
//! 1. Create a new file in this directory (e.g. `fixture.rs`).
//! 2. Define a struct and implement [`DataSource`] for it.
//! 3. Add `mod fixture;` below and re-export your struct in the `pub use` block.
//! 4. Construct it in `main.rs` instead of [`JsonFeedSource`].
//!
//! The worker, sorting and UI are all source-agnostic.

mod article;
mod error;
mod json;

// Re-export the public API of this module so callers can write
// `use crate::source::{Article, DataSource, FeedError};`
pub use article::{Article, FeedResult};
pub use error::FeedError;
pub use json::JsonFeedSource;

#[cfg(test)]
pub(crate) use article::tests::make_article;

/// Decode a raw feed payload.
///
/// Only structural problems are errors: malformed JSON, a wrong type, or a
/// missing required field.  The `status` value is carried through untouched,
/// so a feed reporting something other than `"ok"` still decodes.
pub fn decode(raw: &str) -> Result<FeedResult, FeedError> {
    Ok(serde_json::from_str(raw)?)
}

/// Trait that every feed source must implement.
///
/// The worker calls [`probe()`](DataSource::probe) and then
/// [`fetch()`](DataSource::fetch) on a background thread, and shares the
/// source between fetches, so implementations must be [`Send`] + [`Sync`].
pub trait DataSource: Send + Sync {
    /// Human-readable label used in logs and the status bar.
    fn name(&self) -> &str;

    /// Cheap connectivity pre-check run before every fetch.
    ///
    /// Returning [`FeedError::Offline`] short-circuits the fetch so the UI can
    /// show a "no internet" indicator instead of a generic failure.
    fn probe(&self) -> Result<(), FeedError> {
        Ok(())
    }

    /// Fetch and decode the feed.
    fn fetch(&self) -> Result<FeedResult, FeedError>;
}
