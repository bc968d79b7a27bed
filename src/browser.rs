//! Opening an article outside the terminal.

use std::io;

/// Something that can display a URL.
pub trait Browser {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The platform's default browser, via the [`open`] crate.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        tracing::info!(url, "Opening article in browser");
        open::that_detached(url)
    }
}
