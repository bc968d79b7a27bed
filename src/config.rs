//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

/// The static feed the app reads when no URL is given.
pub const DEFAULT_FEED_URL: &str =
    "https://candidate-test-data-moengage.s3.amazonaws.com/Android/news-api-feed/staticResponse.json";

#[derive(Parser, Debug)]
#[command(name = "newsfeed", about = "Terminal reader for a JSON news feed")]
pub struct Args {
    /// Feed URL
    #[arg(default_value = DEFAULT_FEED_URL)]
    pub url: Url,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Skip the connectivity pre-check before each fetch
    #[arg(long)]
    pub skip_connectivity_check: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
