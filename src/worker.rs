//! Background feed fetching.
//!
//! Each fetch runs on its own short-lived thread and reports back to the UI
//! thread over an [`mpsc`] channel.  Messages carry the generation number the
//! UI handed out when it asked for the fetch, so the UI can drop results from
//! a fetch that has since been superseded.
//!
//! ## For contributors
//!
//! There is no cross-thread cancellation: a superseded fetch runs to
//! completion (bounded by the HTTP client timeout) and its result is ignored.
//! When the [`Fetcher`] is dropped the receiver goes with it, and any thread
//! still in flight exits quietly on its failed send.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::source::{DataSource, FeedError, FeedResult};

/// Message sent from a fetch thread to the UI thread.
#[derive(Debug)]
pub struct FetchMsg {
    /// Generation passed to [`Fetcher::request`].
    pub generation: u64,
    pub result: Result<FeedResult, FeedError>,
}

/// Owns the feed source and the channel fetch threads report on.
pub struct Fetcher {
    source: Arc<dyn DataSource>,
    check_connectivity: bool,
    tx: mpsc::Sender<FetchMsg>,
    rx: mpsc::Receiver<FetchMsg>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn DataSource>, check_connectivity: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            check_connectivity,
            tx,
            rx,
        }
    }

    /// Start a fetch on a background thread.
    pub fn request(&self, generation: u64) {
        let source = Arc::clone(&self.source);
        let check_connectivity = self.check_connectivity;
        let tx = self.tx.clone();

        thread::spawn(move || {
            tracing::debug!(source = source.name(), generation, "Fetch started");

            let result = if check_connectivity {
                source.probe().and_then(|()| source.fetch())
            } else {
                source.fetch()
            };

            if let Err(e) = &result {
                tracing::warn!(source = source.name(), generation, error = %e, "Fetch failed");
            }

            // If the receiver is gone the UI has exited; nothing to report to.
            if tx.send(FetchMsg { generation, result }).is_err() {
                tracing::debug!(generation, "Fetch finished after UI shut down");
            }
        });
    }

    /// Non-blocking receive, called once per UI tick.
    pub fn try_recv(&self) -> Option<FetchMsg> {
        self.rx.try_recv().ok()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
