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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the storefront: the menu items
//! that make up the catalog, the session-local view state, and the derived
//! rows that are actually presented to the user.

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod hours;
pub(crate) mod view_state;

/// A single product on the menu.
///
/// The `name` is unique within a catalog and acts as the identity key for
/// favourites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuItem {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: u32,
    pub(crate) image_ref: String,
    pub(crate) available: bool,
}

impl MenuItem {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        image_ref: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            image_ref: image_ref.into(),
            available,
        }
    }
}

/// A menu item joined with its favourite status for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuRow<'a> {
    pub(crate) item: &'a MenuItem,
    pub(crate) is_favourite: bool,
}
