// SPDX-License-Identifier: PMPL-1.0-or-later

//! Mixed venue and menu item rankings.

use super::sort::{sort_entries, SortKey, SortOrder};
use super::Catalog;
use crate::i18n::Locale;
use crate::types::{CatalogEntry, PriceTier, VenueCategory};
use serde::{Deserialize, Serialize};

/// Which records a ranking draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFilter {
    #[default]
    All,
    Venues,
    MenuItems,
    /// Venues of the bodega category only.
    Bodegas,
}

impl ContentFilter {
    fn includes_venues(&self) -> bool {
        !matches!(self, Self::MenuItems)
    }

    fn includes_items(&self) -> bool {
        matches!(self, Self::All | Self::MenuItems)
    }
}

/// Parameters of [`Catalog::rankings`].
///
/// `category` and `price_tier` narrow venues only; menu items pass through
/// them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingQuery {
    pub content: ContentFilter,
    pub category: Option<VenueCategory>,
    pub price_tier: Option<PriceTier>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl Default for RankingQuery {
    fn default() -> Self {
        Self {
            content: ContentFilter::All,
            category: None,
            price_tier: None,
            sort: SortKey::Rating,
            order: SortOrder::Descending,
        }
    }
}

impl Catalog {
    pub fn rankings(&self, locale: Locale, query: &RankingQuery) -> Vec<CatalogEntry> {
        let mut entries = Vec::new();

        if query.content.includes_venues() {
            let category = match query.content {
                ContentFilter::Bodegas => Some(VenueCategory::Bodega),
                _ => query.category,
            };
            entries.extend(
                self.list_venues(locale)
                    .into_iter()
                    .filter(|venue| category.map_or(true, |c| venue.category == c))
                    .filter(|venue| query.price_tier.map_or(true, |t| venue.price_tier == t))
                    .map(CatalogEntry::Venue),
            );
        }

        if query.content.includes_items() {
            entries.extend(
                self.list_menu_items(locale)
                    .into_iter()
                    .map(CatalogEntry::MenuItem),
            );
        }

        sort_entries(&mut entries, query.sort, query.order, locale);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    fn ids(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(CatalogEntry::id).collect()
    }

    #[test]
    fn default_ranking_mixes_both_kinds() {
        let catalog = Catalog::embedded().unwrap();
        let ranked = catalog.rankings(Locale::Es, &RankingQuery::default());
        assert_eq!(ranked.len(), 7 + 8);
        let ratings: Vec<f64> = ranked
            .iter()
            .map(|entry| match entry {
                CatalogEntry::Venue(venue) => venue.rating,
                CatalogEntry::MenuItem(item) => item.rating_range.map_or(0.0, |r| r.min),
            })
            .collect();
        assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn bodegas_only() {
        let catalog = Catalog::embedded().unwrap();
        let query = RankingQuery {
            content: ContentFilter::Bodegas,
            ..RankingQuery::default()
        };
        assert_eq!(ids(&catalog.rankings(Locale::En, &query)), vec!["bodega-el-rioja"]);
    }

    #[test]
    fn venue_filters_leave_items_alone() {
        let catalog = Catalog::embedded().unwrap();
        let query = RankingQuery {
            category: Some(VenueCategory::Taberna),
            price_tier: Some(PriceTier::Budget),
            ..RankingQuery::default()
        };
        let ranked = catalog.rankings(Locale::Es, &query);
        let venues: Vec<&str> = ranked
            .iter()
            .filter(|entry| entry.kind() == EntryKind::Venue)
            .map(CatalogEntry::id)
            .collect();
        assert_eq!(venues, vec!["bar-soriano"]);
        assert_eq!(
            ranked.iter().filter(|e| e.kind() == EntryKind::MenuItem).count(),
            8
        );
    }

    #[test]
    fn items_by_name() {
        let catalog = Catalog::embedded().unwrap();
        let query = RankingQuery {
            content: ContentFilter::MenuItems,
            sort: SortKey::Name,
            order: SortOrder::Ascending,
            ..RankingQuery::default()
        };
        let ranked = catalog.rankings(Locale::En, &query);
        assert_eq!(ranked.first().map(CatalogEntry::name), Some("Battered Pig's Ear"));
        assert_eq!(ranked.last().map(CatalogEntry::name), Some("Stuffed Piquillo Peppers"));
    }
}
