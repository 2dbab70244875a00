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

//! Session-local view state.
//!
//! Holds the current search text and the set of favourited item names. The
//! state lives for the duration of one session and starts empty every time.

use std::collections::HashSet;

/// Operations a view may request against the menu view state.
///
/// Views never mutate [`ViewState`] directly, they hold something that
/// implements this trait and the application applies the change before the
/// next render.
pub(crate) trait MenuActions {
    fn set_search_text(&self, text: String);
    fn toggle_favourite(&self, name: String);
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ViewState {
    search_text: String,
    favourites: HashSet<String>,
}

impl ViewState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn search_text(&self) -> &str {
        &self.search_text
    }

    pub(crate) fn favourites(&self) -> &HashSet<String> {
        &self.favourites
    }

    /// Replaces the search text verbatim.
    pub(crate) fn set_search_text(&mut self, text: String) {
        self.search_text = text;
    }

    /// Adds `name` to the favourites, or removes it if it is already there.
    ///
    /// Returns the new favourite status of `name`.
    pub(crate) fn toggle_favourite(&mut self, name: &str) -> bool {
        if self.favourites.remove(name) {
            false
        } else {
            self.favourites.insert(name.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn favourites_of(state: &ViewState) -> Vec<&str> {
        let mut names: Vec<&str> = state.favourites().iter().map(String::as_str).collect();
        names.sort();
        names
    }

    #[test]
    fn starts_empty() {
        let state = ViewState::new();

        assert_eq!(state.search_text(), "");
        assert!(state.favourites().is_empty());
    }

    #[test]
    fn search_text_is_stored_verbatim() {
        let mut state = ViewState::new();

        state.set_search_text("  Pizza ".into());

        assert_eq!(state.search_text(), "  Pizza ");
    }

    #[test]
    fn toggle_sequence() {
        let mut state = ViewState::new();

        assert!(state.toggle_favourite("Focaccia"));
        assert!(state.toggle_favourite("Pizza Funghi"));
        assert_eq!(favourites_of(&state), ["Focaccia", "Pizza Funghi"]);

        assert!(!state.toggle_favourite("Focaccia"));
        assert_eq!(favourites_of(&state), ["Pizza Funghi"]);
        assert!(state.favourites().contains("Pizza Funghi"));
        assert!(!state.favourites().contains("Focaccia"));
    }

    #[test]
    fn toggle_accepts_unknown_names() {
        let mut state = ViewState::new();

        state.toggle_favourite("Calzone");

        assert!(state.favourites().contains("Calzone"));
    }

    proptest! {
        #[test]
        fn double_toggle_is_identity(
            initial in proptest::collection::hash_set("[A-Za-z ]{0,12}", 0..8),
            name in "[A-Za-z ]{0,12}",
        ) {
            let mut state = ViewState::new();
            for n in &initial {
                state.toggle_favourite(n);
            }
            let before = state.favourites().clone();

            state.toggle_favourite(&name);
            state.toggle_favourite(&name);

            prop_assert_eq!(state.favourites(), &before);
        }
    }
}
