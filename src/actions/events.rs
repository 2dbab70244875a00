// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), the periodic clock tick, and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: [`handle_event`] routes key presses to the command line and
//!    the menu view, and applies requested changes to the view state.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::{
    App,
    model::{filter::visible_rows, view_state::MenuActions},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetSearchText(String),
    ToggleFavourite(String),

    Status(String),

    Tick,

    ExitApplication,
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !handle_event(app, event)? {
            break;
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` when the application should exit.
///
/// # Errors
///
/// Returns an error for [`AppEvent::FatalError`] or if an event cannot be
/// dispatched, which ends the event loop.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => return Ok(false),

        AppEvent::FatalError(message) => anyhow::bail!(message),

        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::SetSearchText(text) => {
            debug!(search = %text, "search text changed");
            app.menu_view.sync_search_text(&text);
            app.view_state.set_search_text(text);

            let count = visible_rows(&app.catalog, app.view_state.search_text(), app.view_state.favourites()).len();
            app.menu_view.clamp_selection(count);
        }

        AppEvent::ToggleFavourite(name) => {
            if app.catalog.contains(&name) {
                let is_favourite = app.view_state.toggle_favourite(&name);
                info!(item = %name, is_favourite, "favourite toggled");
            } else {
                warn!(item = %name, "ignoring favourite for item not on the menu");
                app.status = Some(format!("No such item: {}", name));
            }
        }

        AppEvent::Status(message) => app.status = Some(message),

        AppEvent::Tick => {}
    }

    Ok(true)
}

/// Routes a key press to the first component that wants it.
///
/// The search bar has priority while it is being edited, then the command
/// line, then the menu list, and finally the global bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    app.status = None;

    let event = Event::Key(key);

    if !app.menu_view.is_searching && app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    let rows = visible_rows(&app.catalog, app.view_state.search_text(), app.view_state.favourites());
    if app.menu_view.process_event(&event, &app.catalog, &rows, &app.event_tx) {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Esc, _) if !app.view_state.search_text().is_empty() => {
            app.event_tx.send(AppEvent::SetSearchText(String::new()))?;
        }

        _ => {}
    }

    Ok(())
}

impl MenuActions for Sender<AppEvent> {
    fn set_search_text(&self, text: String) {
        if self.send(AppEvent::SetSearchText(text)).is_err() {
            warn!("event channel closed, dropping search change");
        }
    }

    fn toggle_favourite(&self, name: String) {
        if self.send(AppEvent::ToggleFavourite(name)).is_err() {
            warn!("event channel closed, dropping favourite toggle");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{config::AppConfig, model::catalog::Catalog};

    fn standard_app() -> App {
        App::new(AppConfig::default(), Catalog::standard().unwrap())
    }

    /// Sends a key press and applies every event it causes, returning whether
    /// the application is still running.
    fn press(app: &mut App, code: KeyCode) -> bool {
        app.event_tx.send(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();

        while let Ok(event) = app.event_rx.try_recv() {
            if !handle_event(app, event).unwrap() {
                return false;
            }
        }
        true
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn visible_names(app: &App) -> Vec<String> {
        visible_rows(&app.catalog, app.view_state.search_text(), app.view_state.favourites())
            .iter()
            .map(|r| r.item.name.clone())
            .collect()
    }

    fn favourites(app: &App) -> HashSet<&str> {
        app.view_state.favourites().iter().map(String::as_str).collect()
    }

    #[test]
    fn typing_a_search_filters_the_menu() {
        let mut app = standard_app();

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "FUN");

        assert_eq!(app.view_state.search_text(), "FUN");
        assert_eq!(visible_names(&app), ["Pizza Funghi"]);
        assert_eq!(app.menu_view.table_state.selected(), Some(0));
    }

    #[test]
    fn keys_typed_into_search_are_not_commands() {
        let mut app = standard_app();

        press(&mut app, KeyCode::Char('/'));
        assert!(press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Char(':'));

        assert_eq!(app.view_state.search_text(), "q:");
        assert!(!app.commander.active());
    }

    #[test]
    fn favourite_toggle_scenario() {
        let mut app = standard_app();

        // Focaccia is the first row
        press(&mut app, KeyCode::Char('f'));

        // Pizza Funghi is the fourth row
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(favourites(&app), HashSet::from(["Focaccia", "Pizza Funghi"]));

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(favourites(&app), HashSet::from(["Pizza Funghi"]));
    }

    #[test]
    fn favourite_survives_search_changes() {
        let mut app = standard_app();

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "salamino");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.view_state.search_text(), "");
        assert_eq!(app.menu_view.search_input.value(), "");
        assert_eq!(visible_names(&app).len(), 6);
        assert_eq!(favourites(&app), HashSet::from(["Pizza Salamino"]));
    }

    #[test]
    fn command_line_favourite_is_validated() {
        let mut app = standard_app();

        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "fav Calzone");
        press(&mut app, KeyCode::Enter);

        assert!(app.view_state.favourites().is_empty());
        assert_eq!(app.status.as_deref(), Some("No such item: Calzone"));

        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "fav Focaccia");
        press(&mut app, KeyCode::Enter);

        assert_eq!(favourites(&app), HashSet::from(["Focaccia"]));
        assert_eq!(app.status, None);
    }

    #[test]
    fn command_line_search_updates_search_bar() {
        let mut app = standard_app();

        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "search spinaci");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.menu_view.search_input.value(), "spinaci");
        assert_eq!(visible_names(&app), ["Pizza Spinaci"]);
    }

    #[test]
    fn search_with_no_matches_clears_selection() {
        let mut app = standard_app();

        app.event_tx.send(AppEvent::SetSearchText("calzone".into())).unwrap();
        let event = app.event_rx.try_recv().unwrap();
        handle_event(&mut app, event).unwrap();

        assert_eq!(app.menu_view.table_state.selected(), None);
        assert!(press(&mut app, KeyCode::Char('f')));
        assert!(app.view_state.favourites().is_empty());
    }

    #[test]
    fn quit_key_exits() {
        let mut app = standard_app();

        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn quit_key_exits_with_empty_menu() {
        let mut app = App::new(AppConfig::default(), Catalog::default());

        assert!(press(&mut app, KeyCode::Char('/')));
        assert!(!app.menu_view.is_searching);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.view_state.search_text(), "");
    }

    #[test]
    fn fatal_error_ends_event_loop() {
        let mut app = standard_app();

        let result = handle_event(&mut app, AppEvent::FatalError("input closed".into()));

        assert_eq!(result.unwrap_err().to_string(), "input closed");
    }
}
