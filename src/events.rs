//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::app::App;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a timeout
/// shorter than an animation frame so the replay keeps moving while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(20))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    app.animation_manager.update();

    Ok(())
}

/// Applies a single key press.
///
/// - `s` searches the maze from scratch and starts the replay
/// - `f` skips the replay to its final picture
/// - `r` clears the search
/// - `q` or escape quits
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('s') => app.solve()?,
        KeyCode::Char('f') => app.animation_manager.finish(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }

    Ok(())
}
