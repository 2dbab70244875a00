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

//! Render the storefront header.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{config::AppConfig, theme::Theme};

/// Renders the shop name, and the tagline while the shop is open.
pub(crate) fn draw_header(f: &mut Frame, area: Rect, config: &AppConfig, is_open: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour));

    let mut lines = vec![
        Line::from(config.shop_name.as_str())
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
    ];

    if is_open {
        lines.push(
            Line::from(config.tagline.as_str())
                .style(Style::default().fg(theme.menu_description_fg).add_modifier(Modifier::ITALIC)),
        );
    }

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    f.render_widget(header, area);
}
