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

//! UI rendering logic for the menu view.
//!
//! Draws the section title, the search bar, and the table of visible rows, or
//! a placeholder message when the catalog has nothing on it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::menu::{EMPTY_MENU_TEXT, MenuView, SEARCH_PLACEHOLDER},
    model::{MenuRow, catalog::Catalog},
    render::icons::{FAVOURITE, NOT_FAVOURITE},
    theme::Theme,
    util::format::format_price,
};

const SOLD_OUT_TEXT: &str = "SOLD OUT";

impl MenuView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        catalog: &Catalog,
        rows: &[MenuRow<'_>],
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let title_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut title = "Our Menu".to_string();
        if !self.search_input.value().is_empty() {
            title.push_str(&format!(" | {} of {} items", rows.len(), catalog.len()));
        }

        let title = Paragraph::new(title)
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .block(title_block);
        f.render_widget(title, chunks[0]);

        if catalog.is_empty() {
            let placeholder = Paragraph::new(EMPTY_MENU_TEXT)
                .style(Style::default().fg(theme.placeholder_colour))
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::vertical(1)));
            f.render_widget(placeholder, chunks[1]);
            return;
        }

        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(chunks[1]);

        self.draw_search_bar(f, body[0], theme);

        self.clamp_selection(rows.len());
        self.draw_table(f, body[1], rows, theme);
    }

    fn draw_search_bar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_searching { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search ");

        let inner = block.inner(area);

        let value = self.search_input.value();
        let text = if value.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.placeholder_colour))
        } else {
            Span::raw(value)
        };

        f.render_widget(Paragraph::new(Line::from(text)).block(block), area);

        if self.is_searching {
            let cursor_x = inner.x + self.search_input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, rows: &[MenuRow<'_>], theme: &Theme) {
        let table_rows = rows.iter().map(|row| {
            let item = row.item;

            let favourite = if row.is_favourite {
                Line::from(FAVOURITE).style(Style::default().fg(theme.favourite_fg))
            } else {
                Line::from(NOT_FAVOURITE).style(Style::default().fg(theme.menu_description_fg))
            };

            let (price, name_style, description_style, price_style) = if item.available {
                (
                    format_price(item.price),
                    Style::default().fg(theme.menu_name_fg).add_modifier(Modifier::BOLD),
                    Style::default().fg(theme.menu_description_fg),
                    Style::default().fg(theme.menu_price_fg),
                )
            } else {
                let dimmed = Style::default().fg(theme.menu_sold_out_fg);
                (SOLD_OUT_TEXT.to_string(), dimmed, dimmed, dimmed.add_modifier(Modifier::BOLD))
            };

            Row::new(vec![
                Cell::from(favourite),
                Cell::from(Line::from(item.name.as_str()).style(name_style)),
                Cell::from(Line::from(item.description.as_str()).style(description_style)),
                Cell::from(Line::from(price).style(price_style).alignment(Alignment::Right)),
            ])
        });

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(25),
                Constraint::Min(0),
                Constraint::Length(9),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Pizza"),
                Cell::from("Ingredients"),
                Cell::from(Line::from("Price").alignment(Alignment::Right)),
            ])
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
