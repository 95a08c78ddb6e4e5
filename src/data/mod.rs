// SPDX-License-Identifier: PMPL-1.0-or-later

//! Base records and their integrity rules.
//!
//! Base data is static. It is parsed and validated once, when a catalog is
//! built, so a dangling relation or a bad price stops startup instead of
//! surfacing as a half-filled record at query time.

use crate::error::{DataError, DataResult};
use crate::types::{MenuItemBase, VariationBase, VenueBase};
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

const VENUES_JSON: &str = include_str!("../../data/base/venues.json");
const ITEMS_JSON: &str = include_str!("../../data/base/items.json");
const VARIATIONS_JSON: &str = include_str!("../../data/base/variations.json");

pub const VENUES_FILE: &str = "venues.json";
pub const ITEMS_FILE: &str = "items.json";
pub const VARIATIONS_FILE: &str = "variations.json";

/// Validated base records, in their natural (file) order.
#[derive(Debug, Clone)]
pub struct BaseData {
    venues: Vec<VenueBase>,
    items: Vec<MenuItemBase>,
    variations: Vec<VariationBase>,
    venue_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
    variation_index: HashMap<String, usize>,
}

impl BaseData {
    /// The base data compiled into the crate.
    pub fn embedded() -> DataResult<Self> {
        Self::from_json(VENUES_JSON, ITEMS_JSON, VARIATIONS_JSON)
    }

    /// Read `venues.json`, `items.json` and `variations.json` from `dir`.
    pub fn from_dir(dir: &Path) -> DataResult<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
        };
        Self::from_json(
            &read(VENUES_FILE)?,
            &read(ITEMS_FILE)?,
            &read(VARIATIONS_FILE)?,
        )
    }

    pub fn from_json(venues: &str, items: &str, variations: &str) -> DataResult<Self> {
        Self::from_parts(
            parse(VENUES_FILE, venues)?,
            parse(ITEMS_FILE, items)?,
            parse(VARIATIONS_FILE, variations)?,
        )
    }

    /// Build from records, enforcing every integrity rule.
    pub fn from_parts(
        venues: Vec<VenueBase>,
        items: Vec<MenuItemBase>,
        variations: Vec<VariationBase>,
    ) -> DataResult<Self> {
        let venue_index = index("venue", venues.iter().map(|v| v.id.as_str()))?;
        let item_index = index("item", items.iter().map(|i| i.id.as_str()))?;
        let variation_index = index("variation", variations.iter().map(|v| v.id.as_str()))?;

        for item in &items {
            check_rating("item", &item.id, item.rating)?;
        }

        for variation in &variations {
            if !item_index.contains_key(&variation.item_id) {
                return Err(DataError::UnknownItem {
                    variation: variation.id.clone(),
                    item: variation.item_id.clone(),
                });
            }
            if !venue_index.contains_key(&variation.venue_id) {
                return Err(DataError::UnknownVenue {
                    variation: variation.id.clone(),
                    venue: variation.venue_id.clone(),
                });
            }
            if !variation.price.is_finite() || variation.price < 0.0 {
                return Err(DataError::InvalidPrice {
                    variation: variation.id.clone(),
                    price: variation.price,
                });
            }
            check_rating("variation", &variation.id, variation.rating)?;
        }

        for venue in &venues {
            check_rating("venue", &venue.id, venue.rating)?;
            if let Some(item) = venue
                .menu_items
                .iter()
                .find(|item| !item_index.contains_key(*item))
            {
                return Err(DataError::UnknownMenuLink {
                    venue: venue.id.clone(),
                    item: item.clone(),
                });
            }
            for featured in &venue.featured {
                let Some(&position) = variation_index.get(featured) else {
                    return Err(DataError::UnknownFeatured {
                        venue: venue.id.clone(),
                        variation: featured.clone(),
                    });
                };
                let served_at = &variations[position].venue_id;
                if *served_at != venue.id {
                    return Err(DataError::FeaturedElsewhere {
                        venue: venue.id.clone(),
                        variation: featured.clone(),
                        served_at: served_at.clone(),
                    });
                }
            }
        }

        Ok(Self {
            venues,
            items,
            variations,
            venue_index,
            item_index,
            variation_index,
        })
    }

    pub fn venues(&self) -> &[VenueBase] {
        &self.venues
    }

    pub fn items(&self) -> &[MenuItemBase] {
        &self.items
    }

    pub fn variations(&self) -> &[VariationBase] {
        &self.variations
    }

    pub fn venue(&self, id: &str) -> Option<&VenueBase> {
        self.venue_index.get(id).map(|&i| &self.venues[i])
    }

    pub fn item(&self, id: &str) -> Option<&MenuItemBase> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }

    pub fn variation(&self, id: &str) -> Option<&VariationBase> {
        self.variation_index.get(id).map(|&i| &self.variations[i])
    }

    /// Variations of one item, in base order.
    pub fn variations_of_item<'a>(
        &'a self,
        item_id: &'a str,
    ) -> impl Iterator<Item = &'a VariationBase> + 'a {
        self.variations.iter().filter(move |v| v.item_id == item_id)
    }

    /// Variations served at one venue, in base order.
    pub fn variations_at_venue<'a>(
        &'a self,
        venue_id: &'a str,
    ) -> impl Iterator<Item = &'a VariationBase> + 'a {
        self.variations.iter().filter(move |v| v.venue_id == venue_id)
    }

    /// Distinct neighborhoods in first-seen order.
    pub fn neighborhoods(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.venues
            .iter()
            .map(|venue| venue.location.neighborhood.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

fn parse<T: DeserializeOwned>(document: &str, json: &str) -> DataResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| DataError::Parse {
        document: document.to_string(),
        source,
    })
}

fn index<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> DataResult<HashMap<String, usize>> {
    let mut map = HashMap::new();
    for (position, id) in ids.enumerate() {
        if map.insert(id.to_string(), position).is_some() {
            return Err(DataError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(map)
}

fn check_rating(kind: &'static str, id: &str, rating: f64) -> DataResult<()> {
    if rating.is_finite() && (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(DataError::InvalidRating {
            kind,
            id: id.to_string(),
            rating,
        })
    }
}
