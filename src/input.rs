//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Keys that only touch app
//! state are applied here; keys that need the outside world (a new fetch, the
//! browser) come back as an [`Action`] for the main loop to carry out.
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action (if one doesn't exist), or an
//!    [`Action`] variant if it needs resources the main loop owns.
//! 2. Add a `KeyCode` match arm in [`handle_key_event`].
//! 3. Update the help text in the status bar (`crate::ui`).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Work the main loop must do in response to a key.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    None,
    /// Start a new fetch.
    Refresh,
    /// Open the selected article in the browser.
    Open,
}

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('s') => app.sort_by_date(),
        KeyCode::Char('r') => return Action::Refresh,
        KeyCode::Enter | KeyCode::Char('o') => return Action::Open,
        _ => {}
    }
    Action::None
}
