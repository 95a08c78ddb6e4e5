// SPDX-License-Identifier: PMPL-1.0-or-later

//! Listing filters.
//!
//! Range filters on menu items use containment: an item matches only when
//! its whole derived range lies inside the bounds. An item priced 1.50 to
//! 3.00 does not match `[0, 2]`. Items without a derived range never match.

use super::Catalog;
use crate::i18n::Locale;
use crate::types::{ItemCategory, MenuItem, PriceTier, ValueRange, Venue, VenueCategory};

/// Whether a derived range passes the `[min, max]` filter.
pub fn range_matches(range: Option<ValueRange>, min: f64, max: f64) -> bool {
    range.is_some_and(|range| range.is_within(min, max))
}

/// Conjunction of optional venue criteria. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueFilter {
    pub category: Option<VenueCategory>,
    pub neighborhood: Option<String>,
    pub price_tier: Option<PriceTier>,
}

impl VenueFilter {
    pub fn matches(&self, venue: &Venue) -> bool {
        self.category.map_or(true, |category| venue.category == category)
            && self
                .neighborhood
                .as_deref()
                .map_or(true, |name| venue.location.neighborhood == name)
            && self.price_tier.map_or(true, |tier| venue.price_tier == tier)
    }

    pub fn apply(&self, venues: Vec<Venue>) -> Vec<Venue> {
        venues.into_iter().filter(|venue| self.matches(venue)).collect()
    }
}

/// Conjunction of optional menu item criteria. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub category: Option<ItemCategory>,
    /// Tag id, not translated text.
    pub tag: Option<String>,
    pub price: Option<(f64, f64)>,
    pub rating: Option<(f64, f64)>,
}

impl ItemFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.category.map_or(true, |category| item.category == category)
            && self
                .tag
                .as_deref()
                .map_or(true, |tag| item.tag_ids.iter().any(|id| id == tag))
            && self
                .price
                .map_or(true, |(min, max)| range_matches(item.price_range, min, max))
            && self
                .rating
                .map_or(true, |(min, max)| range_matches(item.rating_range, min, max))
    }

    pub fn apply(&self, items: Vec<MenuItem>) -> Vec<MenuItem> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

impl Catalog {
    /// Items whose whole price range lies in `[min, max]`.
    pub fn filter_by_price_range(&self, min: f64, max: f64, locale: Locale) -> Vec<MenuItem> {
        ItemFilter {
            price: Some((min, max)),
            ..ItemFilter::default()
        }
        .apply(self.list_menu_items(locale))
    }

    /// Items whose whole rating range lies in `[min, max]`.
    pub fn filter_by_rating_range(&self, min: f64, max: f64, locale: Locale) -> Vec<MenuItem> {
        ItemFilter {
            rating: Some((min, max)),
            ..ItemFilter::default()
        }
        .apply(self.list_menu_items(locale))
    }
}
