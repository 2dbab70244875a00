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

//! Menu catalog.
//!
//! The catalog is built once at startup and handed to the application; it is
//! never mutated afterwards.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::MenuItem;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CatalogError {
    #[error("duplicate menu item name: {0}")]
    DuplicateName(String),

    #[error("menu item {0} must have a price greater than zero")]
    ZeroPrice(String),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from an ordered list of items.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if two items share a name or if any item has
    /// a zero price.
    pub(crate) fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut names = HashSet::with_capacity(items.len());

        for item in &items {
            if item.price == 0 {
                return Err(CatalogError::ZeroPrice(item.name.clone()));
            }
            if !names.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
        }

        Ok(Self { items })
    }

    /// The house menu.
    pub(crate) fn standard() -> Result<Self, CatalogError> {
        Self::new(vec![
            MenuItem::new(
                "Focaccia",
                "Bread with italian olive oil and rosemary",
                6,
                "pizzas/focaccia.jpg",
                true,
            ),
            MenuItem::new(
                "Pizza Margherita",
                "Tomato and mozarella",
                10,
                "pizzas/margherita.jpg",
                true,
            ),
            MenuItem::new(
                "Pizza Spinaci",
                "Tomato, mozarella, spinach, and ricotta cheese",
                12,
                "pizzas/spinaci.jpg",
                true,
            ),
            MenuItem::new(
                "Pizza Funghi",
                "Tomato, mozarella, mushrooms, and onion",
                12,
                "pizzas/funghi.jpg",
                true,
            ),
            MenuItem::new(
                "Pizza Salamino",
                "Tomato, mozarella, and pepperoni",
                15,
                "pizzas/salamino.jpg",
                false,
            ),
            MenuItem::new(
                "Pizza Prosciutto",
                "Tomato, mozarella, ham, aragula, and burrata cheese",
                18,
                "pizzas/prosciutto.jpg",
                true,
            ),
        ])
    }

    pub(crate) fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}
