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

//! Menu list view and row cursor management.
//!
//! This module coordinates the table cursor over the visible menu rows and the
//! search text input that drives the filter.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

use crate::model::MenuRow;

pub(crate) const EMPTY_MENU_TEXT: &str = "Our menu is currently empty. Please check back later!";
pub(crate) const SEARCH_PLACEHOLDER: &str = "Search pizzas...";

pub(crate) struct MenuView {
    pub(crate) table_state: TableState,
    pub(crate) search_input: Input,
    pub(crate) is_searching: bool,
}

impl MenuView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
            search_input: Input::default(),
            is_searching: false,
        }
    }

    /// Replaces the text in the search bar, leaving it untouched if the text
    /// is already the same so the cursor position is kept.
    pub(crate) fn sync_search_text(&mut self, text: &str) {
        if self.search_input.value() != text {
            self.search_input = Input::new(text.to_string());
        }
    }

    /// Keeps the cursor on a valid row after the visible rows have changed.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) if i >= len => len - 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn selected_row<'r, 'a>(&self, rows: &'r [MenuRow<'a>]) -> Option<&'r MenuRow<'a>> {
        self.table_state.selected().and_then(|i| rows.get(i))
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }
}
