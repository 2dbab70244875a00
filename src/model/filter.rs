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

//! Derivation of the rows shown in the menu list.

use std::collections::HashSet;

use crate::model::{MenuRow, catalog::Catalog};

/// Filters the catalog by name and annotates each surviving item with its
/// favourite status.
///
/// Matching is a case-insensitive substring test against the item name, an
/// empty search matches every item. Catalog order is preserved.
pub(crate) fn visible_rows<'a>(
    catalog: &'a Catalog,
    search_text: &str,
    favourites: &HashSet<String>,
) -> Vec<MenuRow<'a>> {
    let needle = search_text.to_lowercase();

    catalog
        .items()
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .map(|item| MenuRow {
            item,
            is_favourite: favourites.contains(&item.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::MenuItem;

    fn names<'a>(rows: &[MenuRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.item.name.as_str()).collect()
    }

    fn ascii_contains_ignore_case(haystack: &str, needle: &str) -> bool {
        needle.is_empty()
            || haystack
                .as_bytes()
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
    }

    fn catalog_strategy() -> impl Strategy<Value = Catalog> {
        proptest::collection::hash_set("[A-Za-z ]{1,10}", 0..10).prop_map(|names| {
            let items = names
                .into_iter()
                .map(|n| MenuItem::new(n, "", 1, "", true))
                .collect();
            Catalog::new(items).unwrap()
        })
    }

    #[test]
    fn pizza_search_matches_only_pizzas() {
        let catalog = Catalog::new(vec![
            MenuItem::new("Focaccia", "", 6, "pizzas/focaccia.jpg", true),
            MenuItem::new("Pizza Salamino", "", 15, "pizzas/salamino.jpg", false),
        ])
        .unwrap();

        let rows = visible_rows(&catalog, "pizza", &HashSet::new());

        assert_eq!(names(&rows), ["Pizza Salamino"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = Catalog::standard().unwrap();

        let rows = visible_rows(&catalog, "FUN", &HashSet::new());
        assert_eq!(names(&rows), ["Pizza Funghi"]);

        let rows = visible_rows(&catalog, "ci", &HashSet::new());
        assert_eq!(names(&rows), ["Focaccia", "Pizza Spinaci", "Pizza Prosciutto"]);
    }

    #[test]
    fn rows_carry_favourite_flag() {
        let catalog = Catalog::standard().unwrap();
        let favourites = HashSet::from(["Pizza Funghi".to_string()]);

        let rows = visible_rows(&catalog, "", &favourites);

        let flagged: Vec<&str> = rows
            .iter()
            .filter(|r| r.is_favourite)
            .map(|r| r.item.name.as_str())
            .collect();
        assert_eq!(flagged, ["Pizza Funghi"]);
    }

    #[test]
    fn empty_catalog_yields_no_rows() {
        let catalog = Catalog::default();

        assert!(visible_rows(&catalog, "", &HashSet::new()).is_empty());
        assert!(visible_rows(&catalog, "pizza", &HashSet::new()).is_empty());
    }

    #[test]
    fn no_match_yields_no_rows() {
        let catalog = Catalog::standard().unwrap();

        assert!(visible_rows(&catalog, "calzone", &HashSet::new()).is_empty());
    }

    proptest! {
        #[test]
        fn filter_keeps_exactly_matching_items_in_order(
            catalog in catalog_strategy(),
            search in "[A-Za-z ]{0,3}",
        ) {
            let rows = visible_rows(&catalog, &search, &HashSet::new());

            let expected: Vec<&str> = catalog
                .items()
                .iter()
                .map(|i| i.name.as_str())
                .filter(|n| ascii_contains_ignore_case(n, &search))
                .collect();

            prop_assert_eq!(names(&rows), expected);
            prop_assert!(rows.iter().all(|r| !r.is_favourite));
        }

        #[test]
        fn any_slice_of_a_name_finds_it(
            name in "[A-Za-z ]{1,10}",
            start in 0usize..10,
            len in 0usize..10,
            upper in any::<bool>(),
        ) {
            let start = start.min(name.len());
            let end = (start + len).min(name.len());
            let slice = &name[start..end];
            let search = if upper { slice.to_uppercase() } else { slice.to_lowercase() };

            let catalog = Catalog::new(vec![MenuItem::new(name.clone(), "", 1, "", true)]).unwrap();
            let rows = visible_rows(&catalog, &search, &HashSet::new());

            prop_assert_eq!(names(&rows), vec![name.as_str()]);
        }

        #[test]
        fn empty_search_returns_everything(
            catalog in catalog_strategy(),
            favourites in proptest::collection::hash_set("[A-Za-z ]{1,10}", 0..5),
        ) {
            let rows = visible_rows(&catalog, "", &favourites);

            prop_assert_eq!(rows.len(), catalog.len());
            for (row, item) in rows.iter().zip(catalog.items()) {
                prop_assert_eq!(row.item, item);
                prop_assert_eq!(row.is_favourite, favourites.contains(&item.name));
            }
        }
    }
}
