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

//! Input handling for the menu view.
//!
//! This module maps raw terminal keyboard events to cursor movement, search
//! bar editing, and favourite toggles. Changes to the view state are requested
//! through [`MenuActions`] rather than applied here.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::MenuView,
    model::{MenuRow, catalog::Catalog, view_state::MenuActions},
};

impl MenuView {
    /// Processes a terminal event against the currently visible rows.
    ///
    /// The search bar is only drawn for a non-empty catalog, so it cannot be
    /// focused otherwise. Returns `true` if the event was consumed by the view.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        catalog: &Catalog,
        rows: &[MenuRow<'_>],
        actions: &impl MenuActions,
    ) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if self.is_searching {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => self.is_searching = false,

                _ => {
                    // Delegate editing keys to the managed input component.
                    if let Some(changed) = self.search_input.handle_event(event) {
                        if changed.value {
                            self.table_state.select(Some(0));
                            actions.set_search_text(self.search_input.value().to_string());
                        }
                    }
                }
            }

            return true;
        }

        match key_event.code {
            KeyCode::Char('/') if !catalog.is_empty() => self.is_searching = true,

            KeyCode::Char('j') | KeyCode::Down => self.goto_next(rows.len()),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(rows.len()),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(rows.len()),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(rows.len()),

            KeyCode::Char('f') | KeyCode::Char(' ') => {
                if let Some(row) = self.selected_row(rows) {
                    actions.toggle_favourite(row.item.name.clone());
                }
            }

            _ => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashSet};

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::filter::visible_rows;

    #[derive(Default)]
    struct RecordingActions {
        searches: RefCell<Vec<String>>,
        toggles: RefCell<Vec<String>>,
    }

    impl MenuActions for RecordingActions {
        fn set_search_text(&self, text: String) {
            self.searches.borrow_mut().push(text);
        }

        fn toggle_favourite(&self, name: String) {
            self.toggles.borrow_mut().push(name);
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_in_search_bar_requests_search() {
        let catalog = Catalog::standard().unwrap();
        let rows = visible_rows(&catalog, "", &HashSet::new());
        let actions = RecordingActions::default();
        let mut view = MenuView::new();

        assert!(view.process_event(&key(KeyCode::Char('/')), &catalog, &rows, &actions));
        assert!(view.is_searching);

        view.process_event(&key(KeyCode::Char('f')), &catalog, &rows, &actions);
        view.process_event(&key(KeyCode::Char('u')), &catalog, &rows, &actions);
        view.process_event(&key(KeyCode::Backspace), &catalog, &rows, &actions);

        assert_eq!(*actions.searches.borrow(), ["f", "fu", "f"]);
        assert!(actions.toggles.borrow().is_empty());

        view.process_event(&key(KeyCode::Esc), &catalog, &rows, &actions);
        assert!(!view.is_searching);
    }

    #[test]
    fn favourite_key_toggles_selected_row() {
        let catalog = Catalog::standard().unwrap();
        let rows = visible_rows(&catalog, "", &HashSet::new());
        let actions = RecordingActions::default();
        let mut view = MenuView::new();
        view.clamp_selection(rows.len());

        view.process_event(&key(KeyCode::Char('f')), &catalog, &rows, &actions);
        view.process_event(&key(KeyCode::Down), &catalog, &rows, &actions);
        view.process_event(&key(KeyCode::Char(' ')), &catalog, &rows, &actions);

        assert_eq!(*actions.toggles.borrow(), ["Focaccia", "Pizza Margherita"]);
    }

    #[test]
    fn favourite_key_without_rows_does_nothing() {
        let catalog = Catalog::default();
        let rows = visible_rows(&catalog, "", &HashSet::new());
        let actions = RecordingActions::default();
        let mut view = MenuView::new();

        view.process_event(&key(KeyCode::Char('f')), &catalog, &rows, &actions);

        assert!(actions.toggles.borrow().is_empty());
    }

    #[test]
    fn search_bar_cannot_be_focused_without_a_menu() {
        let catalog = Catalog::default();
        let rows = visible_rows(&catalog, "", &HashSet::new());
        let actions = RecordingActions::default();
        let mut view = MenuView::new();

        assert!(!view.process_event(&key(KeyCode::Char('/')), &catalog, &rows, &actions));
        assert!(!view.is_searching);
    }

    #[test]
    fn unhandled_keys_fall_through() {
        let catalog = Catalog::standard().unwrap();
        let rows = visible_rows(&catalog, "", &HashSet::new());
        let actions = RecordingActions::default();
        let mut view = MenuView::new();

        assert!(!view.process_event(&key(KeyCode::Char('q')), &catalog, &rows, &actions));
        assert!(!view.process_event(&key(KeyCode::Char(':')), &catalog, &rows, &actions));
    }
}
