// SPDX-License-Identifier: PMPL-1.0-or-later

//! The read-only query surface.
//!
//! Every operation takes a [`Locale`] and returns composed records; callers
//! never see base records or bundles. Results follow base data order unless
//! a sort is requested. Composition runs per call; only bundles are cached.

mod filter;
mod rankings;
mod search;
mod sort;

pub use filter::{range_matches, ItemFilter, VenueFilter};
pub use rankings::{ContentFilter, RankingQuery};
pub use search::{menu_item_matches, venue_matches};
pub use sort::{
    collation_key, sort_by_key, sort_entries, sort_menu_items, sort_venues, Rankable, SortKey,
    SortOrder,
};

use crate::bundle::{Bundle, BundleLoader, EmbeddedSource, Namespace, TranslationSource};
use crate::compose::{compose_menu_item, compose_variation, compose_venue};
use crate::data::BaseData;
use crate::error::DataResult;
use crate::i18n::Locale;
use crate::types::{
    ItemCategory, ItemVariation, MenuItem, PriceTier, Venue, VenueCategory, VenueMenuEntry,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Base data plus a bundle loader: everything a page render needs.
#[derive(Debug)]
pub struct Catalog {
    data: BaseData,
    bundles: BundleLoader,
}

impl Catalog {
    pub fn new(data: BaseData, source: impl TranslationSource + 'static) -> Self {
        Self::with_loader(data, BundleLoader::new(source))
    }

    pub fn with_loader(data: BaseData, bundles: BundleLoader) -> Self {
        Self { data, bundles }
    }

    /// Embedded base data with embedded bundles.
    pub fn embedded() -> DataResult<Self> {
        Ok(Self::new(BaseData::embedded()?, EmbeddedSource))
    }

    pub fn data(&self) -> &BaseData {
        &self.data
    }

    pub fn bundles(&self) -> &BundleLoader {
        &self.bundles
    }

    fn bundle(&self, locale: Locale, namespace: Namespace) -> Arc<Bundle> {
        self.bundles.load(locale, namespace)
    }

    // ─── Venues ─────────────────────────────────────────────────────

    pub fn list_venues(&self, locale: Locale) -> Vec<Venue> {
        let venues = self.bundle(locale, Namespace::Venues);
        let common = self.bundle(locale, Namespace::Common);
        self.data
            .venues()
            .iter()
            .map(|base| compose_venue(base, &venues, &common, locale))
            .collect()
    }

    pub fn get_venue(&self, id: &str, locale: Locale) -> Option<Venue> {
        let base = self.data.venue(id)?;
        let venues = self.bundle(locale, Namespace::Venues);
        let common = self.bundle(locale, Namespace::Common);
        Some(compose_venue(base, &venues, &common, locale))
    }

    /// Venues whose id is in `ids`, in base order. Unknown ids are ignored.
    pub fn list_venues_by_ids<S: AsRef<str>>(&self, ids: &[S], locale: Locale) -> Vec<Venue> {
        let wanted: HashSet<&str> = ids.iter().map(AsRef::as_ref).collect();
        self.list_venues(locale)
            .into_iter()
            .filter(|venue| wanted.contains(venue.id.as_str()))
            .collect()
    }

    pub fn list_venues_by_category(&self, category: VenueCategory, locale: Locale) -> Vec<Venue> {
        VenueFilter {
            category: Some(category),
            ..VenueFilter::default()
        }
        .apply(self.list_venues(locale))
    }

    /// Exact match on the neighborhood name.
    pub fn list_venues_by_neighborhood(&self, name: &str, locale: Locale) -> Vec<Venue> {
        VenueFilter {
            neighborhood: Some(name.to_string()),
            ..VenueFilter::default()
        }
        .apply(self.list_venues(locale))
    }

    pub fn list_venues_by_price_tier(&self, tier: PriceTier, locale: Locale) -> Vec<Venue> {
        VenueFilter {
            price_tier: Some(tier),
            ..VenueFilter::default()
        }
        .apply(self.list_venues(locale))
    }

    /// The `n` best-rated venues; equal ratings keep base order.
    pub fn top_rated_venues(&self, n: usize, locale: Locale) -> Vec<Venue> {
        let mut venues = self.list_venues(locale);
        sort_venues(&mut venues, SortKey::Rating, SortOrder::Descending, locale);
        venues.truncate(n);
        venues
    }

    pub fn categories(&self) -> &'static [VenueCategory] {
        VenueCategory::all()
    }

    pub fn item_categories(&self) -> &'static [ItemCategory] {
        ItemCategory::all()
    }

    pub fn neighborhoods(&self) -> Vec<String> {
        self.data
            .neighborhoods()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    // ─── Menu items ─────────────────────────────────────────────────

    pub fn list_menu_items(&self, locale: Locale) -> Vec<MenuItem> {
        let items = self.bundle(locale, Namespace::MenuItems);
        let common = self.bundle(locale, Namespace::Common);
        self.data
            .items()
            .iter()
            .map(|base| compose_menu_item(base, &items, &common, self.data.variations(), locale))
            .collect()
    }

    pub fn get_menu_item(&self, id: &str, locale: Locale) -> Option<MenuItem> {
        let base = self.data.item(id)?;
        let items = self.bundle(locale, Namespace::MenuItems);
        let common = self.bundle(locale, Namespace::Common);
        Some(compose_menu_item(
            base,
            &items,
            &common,
            self.data.variations(),
            locale,
        ))
    }

    /// Every variation of one item, in base order.
    pub fn list_item_variations(&self, item_id: &str, locale: Locale) -> Vec<ItemVariation> {
        let bundle = self.bundle(locale, Namespace::Variations);
        self.data
            .variations_of_item(item_id)
            .map(|base| compose_variation(base, &bundle, locale))
            .collect()
    }

    pub fn get_item_variation(&self, id: &str, locale: Locale) -> Option<ItemVariation> {
        let base = self.data.variation(id)?;
        let bundle = self.bundle(locale, Namespace::Variations);
        Some(compose_variation(base, &bundle, locale))
    }

    /// Items with at least one variation at `venue_id`. Each item appears
    /// once, in base item order.
    pub fn list_items_by_venue(&self, venue_id: &str, locale: Locale) -> Vec<MenuItem> {
        let served: HashSet<&str> = self
            .data
            .variations_at_venue(venue_id)
            .map(|variation| variation.item_id.as_str())
            .collect();
        self.list_menu_items(locale)
            .into_iter()
            .filter(|item| served.contains(item.id.as_str()))
            .collect()
    }

    /// Items carrying a tag, matched on the tag id rather than its text.
    pub fn list_menu_items_by_tag(&self, tag_id: &str, locale: Locale) -> Vec<MenuItem> {
        ItemFilter {
            tag: Some(tag_id.to_string()),
            ..ItemFilter::default()
        }
        .apply(self.list_menu_items(locale))
    }

    /// The variations a venue features, in the venue's declared order.
    pub fn featured_variations(&self, venue_id: &str, locale: Locale) -> Vec<ItemVariation> {
        let Some(venue) = self.data.venue(venue_id) else {
            return Vec::new();
        };
        let bundle = self.bundle(locale, Namespace::Variations);
        venue
            .featured
            .iter()
            .filter_map(|id| self.data.variation(id))
            .map(|base| compose_variation(base, &bundle, locale))
            .collect()
    }

    /// A venue's menu: every variation served there with its item.
    pub fn venue_menu(&self, venue_id: &str, locale: Locale) -> Vec<VenueMenuEntry> {
        let items: HashMap<String, MenuItem> = self
            .list_items_by_venue(venue_id, locale)
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        let bundle = self.bundle(locale, Namespace::Variations);
        self.data
            .variations_at_venue(venue_id)
            .filter_map(|base| {
                let item = items.get(&base.item_id)?.clone();
                Some(VenueMenuEntry {
                    item,
                    variation: compose_variation(base, &bundle, locale),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog")
    }

    #[test]
    fn unknown_ids_are_absent() {
        let catalog = catalog();
        assert!(catalog.get_venue("bar-nowhere", Locale::Es).is_none());
        assert!(catalog.get_menu_item("pintxo-nowhere", Locale::Es).is_none());
        assert!(catalog.get_item_variation("nope", Locale::Es).is_none());
        assert!(catalog.featured_variations("nope", Locale::Es).is_empty());
    }

    #[test]
    fn unknown_id_lookup_does_not_touch_bundles() {
        let catalog = catalog();
        catalog.get_venue("bar-nowhere", Locale::Fr);
        assert!(catalog.bundles().cache().is_empty());
    }

    #[test]
    fn items_by_venue_are_distinct() {
        let catalog = catalog();
        let items = catalog.list_items_by_venue("taberna-herrerias", Locale::Es);
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["pimientos-piquillo", "tortilla-patatas"]);
    }

    #[test]
    fn venue_menu_pairs_items_with_local_variation() {
        let catalog = catalog();
        let menu = catalog.venue_menu("bar-angel", Locale::En);
        assert_eq!(menu.len(), 2);
        for entry in &menu {
            assert_eq!(entry.variation.venue_id, "bar-angel");
            assert_eq!(entry.variation.item_id, entry.item.id);
        }
    }

    #[test]
    fn featured_follow_declared_order() {
        let catalog = catalog();
        let featured = catalog.featured_variations("la-traviesa", Locale::Es);
        let ids: Vec<&str> = featured.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["la-traviesa-bocatita-travieso", "la-traviesa-taco-de-costilla"]
        );
    }
}
