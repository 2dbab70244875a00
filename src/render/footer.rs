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

//! Render the storefront footer.
//!
//! While the shop is open the footer invites an order, otherwise it shows the
//! closed message.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

pub(crate) const OPEN_TEXT: &str = "We are currently open, place your order now!";
pub(crate) const ORDER_BUTTON_TEXT: &str = " Order ";
pub(crate) const CLOSED_TEXT: &str = "Sorry, we are closed for the day.";

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, is_open: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border_colour));

    let line = if is_open {
        Line::from(vec![
            Span::styled(OPEN_TEXT, Style::default().fg(theme.open_fg)),
            Span::raw("  "),
            Span::styled(
                ORDER_BUTTON_TEXT,
                Style::default()
                    .fg(Color::Black)
                    .bg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(CLOSED_TEXT, Style::default().fg(theme.closed_fg)))
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), area);
}
