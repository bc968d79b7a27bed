//! newsfeed — a terminal reader for a static JSON news feed.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐  FetchMsg  ┌──────────┐  draw()  ┌──────────┐
//! │ worker.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread)  │  (channel) │ (state)  │          │ (render) │
//! └───────────┘            └──────────┘          └──────────┘
//!       ▲                       ▲
//!       │ Action::Refresh       │ handle_key_event()
//!       └──────────────────┌──────────┐
//!                          │ input.rs │
//!                          └──────────┘
//! ```
//!
//! * **`source/`** — article types, JSON decoding and the HTTP source.
//! * **`sort`** — pure chronological ordering of articles.
//! * **`worker`** — runs each fetch on a background thread.
//! * **`app`** — owns all application state (articles, fetch state, sort
//!   direction, scroll position).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations and main-loop actions.
//! * **`browser`** — hands article URLs to the system browser.
//! * **`config`** — command-line arguments.
//! * **`main`** — wires everything together: parse args, set up logging and
//!   the terminal, and run the event loop.

mod app;
mod browser;
mod config;
mod input;
mod sort;
mod source;
mod ui;
mod worker;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;
use browser::SystemBrowser;
use config::Args;
use input::Action;
use source::JsonFeedSource;
use worker::Fetcher;

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Send `tracing` output to `path`.  The terminal belongs to the UI, so
/// without a log file nothing is recorded.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    install_panic_hook();

    // -- configure the feed source -------------------------------------------
    let source = JsonFeedSource::new(args.url.clone(), "News", args.timeout())
        .context("Failed to build HTTP client")?;
    let fetcher = Fetcher::new(Arc::new(source), !args.skip_connectivity_check);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new();

    fetcher.request(app.begin_fetch());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Apply any finished fetches.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process fetch results
        while let Some(msg) = fetcher.try_recv() {
            app.apply_fetch(msg);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match input::handle_key_event(&mut app, key) {
                    Action::None => {}
                    Action::Refresh => fetcher.request(app.begin_fetch()),
                    Action::Open => {
                        if let Err(e) = app.open_selected(&SystemBrowser) {
                            tracing::warn!(error = %e, "Failed to open browser");
                            app.status = format!("Could not open browser: {e}");
                        }
                    }
                }
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal; `fetcher` goes with it
    // and any fetch still in flight finishes into a closed channel.
    Ok(())
}
