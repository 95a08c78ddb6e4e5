// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ordering of listings.
//!
//! All sorts are stable: equal keys keep their base order, in both
//! directions. Numeric keys compare with `f64::total_cmp`. Names compare on a
//! collation key that folds case and accents, so "Ángel" sorts with "Angel".

use crate::i18n::Locale;
use crate::types::{CatalogEntry, MenuItem, Venue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sorts after every plain letter, so Spanish "ñ" lands between "n" and "o".
const ENYE_WEIGHT: char = '~';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Rating,
    Price,
    Popularity,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[Self::Name, Self::Rating, Self::Price, Self::Popularity]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::Price => "price",
            Self::Popularity => "popularity",
        }
    }

    /// Names and prices read naturally low to high; ratings and popularity
    /// best first.
    pub fn default_order(&self) -> SortOrder {
        match self {
            Self::Name | Self::Price => SortOrder::Ascending,
            Self::Rating | Self::Popularity => SortOrder::Descending,
        }
    }

    fn value<T: Rankable>(&self, subject: &T) -> f64 {
        match self {
            Self::Rating => subject.rating_key(),
            Self::Price => subject.price_key(),
            Self::Popularity => subject.popularity_key(),
            Self::Name => 0.0,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Something a listing can be ordered by.
pub trait Rankable {
    fn sort_name(&self) -> &str;
    fn rating_key(&self) -> f64;
    fn price_key(&self) -> f64;
    fn popularity_key(&self) -> f64;
}

impl Rankable for Venue {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn rating_key(&self) -> f64 {
        self.rating
    }

    fn price_key(&self) -> f64 {
        f64::from(self.price_tier.ordinal())
    }

    fn popularity_key(&self) -> f64 {
        self.rating
    }
}

/// Items rank on the low end of their derived ranges. An item without
/// variations ranks as zero.
impl Rankable for MenuItem {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn rating_key(&self) -> f64 {
        self.rating_range.map_or(0.0, |range| range.min)
    }

    fn price_key(&self) -> f64 {
        self.price_range.map_or(0.0, |range| range.min)
    }

    fn popularity_key(&self) -> f64 {
        self.rating
    }
}

impl Rankable for CatalogEntry {
    fn sort_name(&self) -> &str {
        self.name()
    }

    fn rating_key(&self) -> f64 {
        match self {
            Self::Venue(venue) => venue.rating_key(),
            Self::MenuItem(item) => item.rating_key(),
        }
    }

    fn price_key(&self) -> f64 {
        match self {
            Self::Venue(venue) => venue.price_key(),
            Self::MenuItem(item) => item.price_key(),
        }
    }

    fn popularity_key(&self) -> f64 {
        match self {
            Self::Venue(venue) => venue.popularity_key(),
            Self::MenuItem(item) => item.popularity_key(),
        }
    }
}

/// Case- and accent-folded form of `text` for ordering in `locale`.
pub fn collation_key(text: &str, locale: Locale) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c == 'ñ' && locale == Locale::Es {
            key.push('n');
            key.push(ENYE_WEIGHT);
            continue;
        }
        key.extend(std::iter::once(c).nfd().filter(|c| !is_combining_mark(*c)));
    }
    key
}

/// Stable in-place sort of any rankable listing.
pub fn sort_by_key<T: Rankable>(items: &mut Vec<T>, key: SortKey, order: SortOrder, locale: Locale) {
    match key {
        SortKey::Name => {
            let mut keyed: Vec<(String, T)> = items
                .drain(..)
                .map(|item| (collation_key(item.sort_name(), locale), item))
                .collect();
            keyed.sort_by(|a, b| order.apply(a.0.cmp(&b.0)));
            items.extend(keyed.into_iter().map(|(_, item)| item));
        }
        _ => items.sort_by(|a, b| order.apply(key.value(a).total_cmp(&key.value(b)))),
    }
}

pub fn sort_venues(venues: &mut Vec<Venue>, key: SortKey, order: SortOrder, locale: Locale) {
    sort_by_key(venues, key, order, locale);
}

pub fn sort_menu_items(items: &mut Vec<MenuItem>, key: SortKey, order: SortOrder, locale: Locale) {
    sort_by_key(items, key, order, locale);
}

pub fn sort_entries(entries: &mut Vec<CatalogEntry>, key: SortKey, order: SortOrder, locale: Locale) {
    sort_by_key(entries, key, order, locale);
}
