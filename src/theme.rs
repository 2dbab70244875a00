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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the storefront's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,
    pub(crate) placeholder_colour: Color,

    pub(crate) menu_name_fg: Color,
    pub(crate) menu_description_fg: Color,
    pub(crate) menu_price_fg: Color,
    pub(crate) menu_sold_out_fg: Color,
    pub(crate) favourite_fg: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) open_fg: Color,
    pub(crate) closed_fg: Color,
}

impl Default for Theme {
    // Returns the standard storefront theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(36, 28, 22),
            accent_colour: Color::Rgb(237, 201, 104),
            border_colour: Color::Rgb(102, 102, 102),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(56, 44, 36),
            placeholder_colour: Color::Rgb(130, 124, 118),

            menu_name_fg: Color::Rgb(255, 255, 255),
            menu_description_fg: Color::Rgb(186, 180, 170),
            menu_price_fg: Color::Rgb(237, 201, 104),
            menu_sold_out_fg: Color::Rgb(110, 104, 98),
            favourite_fg: Color::Rgb(230, 70, 70),
            highlight_bg: Color::Rgb(80, 62, 50),

            open_fg: Color::Rgb(120, 200, 120),
            closed_fg: Color::Rgb(200, 110, 100),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no fixed value and yield
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
