//! Application state.
//!
//! [`App`] is the single writer of the article list.  Fetch results and sort
//! requests both replace the list wholesale; nothing edits it element by
//! element except URL normalization right before an article is opened.

use std::io;

use ratatui::widgets::ListState;

use crate::browser::Browser;
use crate::sort::{sort_by_date, SortOrder};
use crate::source::{Article, FeedError};
use crate::worker::FetchMsg;

/// Where the current fetch stands.
///
/// `Idle → Loading → Loaded | Failed`.  Sorting keeps a `Loaded` feed
/// `Loaded`; a new fetch from any state re-enters `Loading`.
#[derive(Debug, Default)]
pub enum FeedState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FeedError),
}

pub struct App {
    /// Articles in display order.
    pub articles: Vec<Article>,
    pub state: FeedState,
    /// Direction the *next* sort request will use.
    pub sort_order: SortOrder,
    /// Generation of the most recent fetch request.
    generation: u64,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last status message.
    pub status: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            state: FeedState::Idle,
            sort_order: SortOrder::Ascending,
            generation: 0,
            list_state: ListState::default(),
            quit: false,
            status: "Starting…".into(),
        }
    }

    // -- fetch lifecycle -----------------------------------------------------

    /// Enter `Loading` and return the generation to tag the fetch with.
    ///
    /// Any fetch still in flight from an earlier generation becomes stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.state = FeedState::Loading;
        self.status = "Loading…".into();
        self.generation
    }

    /// Apply a finished fetch.  Returns `false` if it was stale and ignored.
    pub fn apply_fetch(&mut self, msg: FetchMsg) -> bool {
        if msg.generation != self.generation {
            tracing::debug!(
                stale = msg.generation,
                current = self.generation,
                "Discarding superseded fetch result"
            );
            return false;
        }

        match msg.result {
            Ok(feed) => {
                let count = feed.articles.len();
                self.articles = feed.articles;
                self.state = FeedState::Loaded;
                self.status = format!("Fetched {count} articles");
            }
            Err(e) => {
                self.articles = Vec::new();
                self.status = match &e {
                    FeedError::Offline(_) => "No internet connection".into(),
                    other => format!("Error: {other}"),
                };
                self.state = FeedState::Failed(e);
            }
        }

        self.list_state
            .select(if self.articles.is_empty() { None } else { Some(0) });
        true
    }

    // -- sorting -------------------------------------------------------------

    /// Sort the loaded feed in [`sort_order`](App::sort_order), then flip the
    /// direction for the next call.  Does nothing unless a feed is loaded.
    pub fn sort_by_date(&mut self) {
        if !matches!(self.state, FeedState::Loaded) {
            self.status = "Nothing to sort yet".into();
            return;
        }

        let order = self.sort_order;
        self.articles = sort_by_date(&self.articles, order);
        self.sort_order = order.toggled();
        self.status = format!("Sorted {}", order.label());
        tracing::debug!(?order, count = self.articles.len(), "Sorted articles");
    }

    // -- opening -------------------------------------------------------------

    /// Normalize the selected article's URL and hand it to `browser`.
    pub fn open_selected(&mut self, browser: &dyn Browser) -> io::Result<()> {
        let Some(article) = self
            .list_state
            .selected()
            .and_then(|i| self.articles.get_mut(i))
        else {
            return Ok(());
        };

        let url = article.normalize_url();
        browser.open(url)?;
        self.status = format!("Opened {url}");
        Ok(())
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.articles.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.articles.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.articles.is_empty() {
            self.list_state.select(Some(self.articles.len() - 1));
        }
    }
}
