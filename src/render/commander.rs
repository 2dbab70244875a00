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

//! Render the command-line interface.
//!
//! This module renders the visual representation of the command-line: the
//! current text and cursor while a command is being typed, otherwise the
//! latest status message or a short key legend.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &str = "/ search   j/k move   f favourite   : command   q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let style = Style::default().bg(app.theme.commander_bg);

    let paragraph = if commander.active() {
        Paragraph::new(format!(":{}", commander.input.value()))
            .style(style.fg(app.theme.commander_colour))
    } else if let Some(status) = &app.status {
        Paragraph::new(status.as_str()).style(style.fg(app.theme.accent_colour))
    } else {
        Paragraph::new(KEY_HINTS).style(style.fg(app.theme.placeholder_colour))
    };

    f.render_widget(paragraph, container[0]);

    if commander.active() {
        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
