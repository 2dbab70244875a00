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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Each pass re-derives the visible rows from the
//! catalog and view state, and reads the clock once so the header and footer
//! always agree on whether the shop is open.

mod commander;
mod footer;
mod header;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    model::{filter::visible_rows, hours},
    render::{commander::draw_commander, footer::draw_footer, header::draw_header},
};

/// Renders the user interface to the terminal frame at the current hour.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    draw_at_hour(f, app, hours::current_hour());
}

/// Renders the user interface as it appears at `hour`.
///
/// The screen is partitioned into the header, the menu, the footer, and a
/// single-line command bar.
pub(crate) fn draw_at_hour(f: &mut Frame, app: &mut App, hour: u32) {
    let is_open = app.config.opening_hours.is_open(hour);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, outer[0], &app.config, is_open, &app.theme);

    let rows = visible_rows(&app.catalog, app.view_state.search_text(), app.view_state.favourites());
    app.menu_view.draw(f, outer[1], &app.catalog, &rows, &app.theme);

    draw_footer(f, outer[2], is_open, &app.theme);

    draw_commander(f, outer[3], app);
}
