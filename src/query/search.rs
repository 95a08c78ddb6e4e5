// SPDX-License-Identifier: PMPL-1.0-or-later

//! Free-text search over composed records.
//!
//! Matching is a case-insensitive substring test against the localized
//! text of a record, so the same query finds different records in
//! different locales. A blank query matches everything.

use super::Catalog;
use crate::i18n::Locale;
use crate::types::{CatalogEntry, MenuItem, Venue};

/// Whether `venue` matches an already lowercased, trimmed needle.
pub fn venue_matches(venue: &Venue, needle: &str) -> bool {
    contains(&venue.name, needle) || contains(&venue.description, needle)
}

/// Whether `item` matches an already lowercased, trimmed needle.
///
/// Ingredients and tags are matched on their translated text.
pub fn menu_item_matches(item: &MenuItem, needle: &str) -> bool {
    contains(&item.name, needle)
        || contains(&item.description, needle)
        || item.ingredients.iter().any(|text| contains(text, needle))
        || item.tags.iter().any(|text| contains(text, needle))
}

fn contains(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

impl Catalog {
    /// Venues then menu items matching `query`, each group in base order.
    pub fn search(&self, query: &str, locale: Locale) -> Vec<CatalogEntry> {
        self.search_venues(query, locale)
            .into_iter()
            .map(CatalogEntry::Venue)
            .chain(
                self.search_menu_items(query, locale)
                    .into_iter()
                    .map(CatalogEntry::MenuItem),
            )
            .collect()
    }

    pub fn search_venues(&self, query: &str, locale: Locale) -> Vec<Venue> {
        let needle = normalize(query);
        self.list_venues(locale)
            .into_iter()
            .filter(|venue| venue_matches(venue, &needle))
            .collect()
    }

    pub fn search_menu_items(&self, query: &str, locale: Locale) -> Vec<MenuItem> {
        let needle = normalize(query);
        self.list_menu_items(locale)
            .into_iter()
            .filter(|item| menu_item_matches(item, &needle))
            .collect()
    }
}
