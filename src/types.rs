// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for the catalog
//!
//! Base records (`*Base`) hold the locale-invariant facts and are what the
//! data files contain. Composed records ([`Venue`], [`MenuItem`],
//! [`ItemVariation`]) are base records merged with one locale's text and are
//! the only shape handed to callers.

use serde::{Deserialize, Serialize};

/// Kind of venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueCategory {
    Bar,
    Restaurant,
    Taberna,
    Bodega,
}

impl VenueCategory {
    pub fn all() -> &'static [VenueCategory] {
        &[
            VenueCategory::Bar,
            VenueCategory::Restaurant,
            VenueCategory::Taberna,
            VenueCategory::Bodega,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VenueCategory::Bar => "bar",
            VenueCategory::Restaurant => "restaurant",
            VenueCategory::Taberna => "taberna",
            VenueCategory::Bodega => "bodega",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "bar" | "bars" => Some(VenueCategory::Bar),
            "restaurant" | "restaurante" => Some(VenueCategory::Restaurant),
            "taberna" | "tavern" => Some(VenueCategory::Taberna),
            "bodega" | "winery" => Some(VenueCategory::Bodega),
            _ => None,
        }
    }
}

impl std::fmt::Display for VenueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Traditional,
    Modern,
    Fusion,
    Vegetarian,
    Seafood,
    Meat,
}

impl ItemCategory {
    pub fn all() -> &'static [ItemCategory] {
        &[
            ItemCategory::Traditional,
            ItemCategory::Modern,
            ItemCategory::Fusion,
            ItemCategory::Vegetarian,
            ItemCategory::Seafood,
            ItemCategory::Meat,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Traditional => "traditional",
            ItemCategory::Modern => "modern",
            ItemCategory::Fusion => "fusion",
            ItemCategory::Vegetarian => "vegetarian",
            ItemCategory::Seafood => "seafood",
            ItemCategory::Meat => "meat",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Venue price tier, `€` through `€€€€`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "€")]
    Budget,
    #[serde(rename = "€€")]
    Moderate,
    #[serde(rename = "€€€")]
    Upscale,
    #[serde(rename = "€€€€")]
    Premium,
}

impl PriceTier {
    pub fn all() -> &'static [PriceTier] {
        &[
            PriceTier::Budget,
            PriceTier::Moderate,
            PriceTier::Upscale,
            PriceTier::Premium,
        ]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTier::Budget => "€",
            PriceTier::Moderate => "€€",
            PriceTier::Upscale => "€€€",
            PriceTier::Premium => "€€€€",
        }
    }

    /// 1 for `€` up to 4 for `€€€€`.
    pub fn ordinal(&self) -> u8 {
        match self {
            PriceTier::Budget => 1,
            PriceTier::Moderate => 2,
            PriceTier::Upscale => 3,
            PriceTier::Premium => 4,
        }
    }

    /// Accepts the symbol form (`"€€"`) or the ordinal (`"2"`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        PriceTier::all()
            .iter()
            .copied()
            .find(|tier| tier.symbol() == value || tier.ordinal().to_string() == value)
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub coordinates: Coordinates,
    pub neighborhood: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Locale-invariant venue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueBase {
    pub id: String,
    pub category: VenueCategory,
    pub location: Location,
    #[serde(default)]
    pub contact: Contact,
    pub price_tier: PriceTier,
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    /// Ordered; the first image is the main one.
    #[serde(default)]
    pub images: Vec<String>,
    /// Feature term ids, resolved through the common dictionary.
    #[serde(default)]
    pub features: Vec<String>,
    /// Ids of the menu items served here.
    #[serde(default)]
    pub menu_items: Vec<String>,
    /// Ids of the variations this venue is known for.
    #[serde(default)]
    pub featured: Vec<String>,
}

/// Locale-invariant menu item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemBase {
    pub id: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Popularity score on the same 0..=5 scale as ratings.
    pub rating: f64,
}

/// One menu item as served at one venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationBase {
    pub id: String,
    pub item_id: String,
    pub venue_id: String,
    pub price: f64,
    pub rating: f64,
    pub image: String,
}

/// Inclusive min/max pair derived from a set of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest range covering every value; `None` for no values.
    pub fn spanning<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, value| match acc {
            None => Some(Self::new(value, value)),
            Some(range) => Some(Self::new(range.min.min(value), range.max.max(value))),
        })
    }

    /// Whether the whole range lies inside `[lower, upper]`.
    pub fn is_within(&self, lower: f64, upper: f64) -> bool {
        self.min >= lower && self.max <= upper
    }

    pub fn is_single(&self) -> bool {
        self.min == self.max
    }
}

/// Fields derived from an item's variations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRanges {
    pub price_range: Option<ValueRange>,
    pub rating_range: Option<ValueRange>,
    pub image: Option<String>,
}

impl ItemRanges {
    pub fn empty() -> Self {
        Self {
            price_range: None,
            rating_range: None,
            image: None,
        }
    }
}

/// Display-ready venue for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub category: VenueCategory,
    pub name: String,
    pub description: String,
    pub review: String,
    pub location: Location,
    pub contact: Contact,
    pub price_tier: PriceTier,
    pub rating: f64,
    pub total_reviews: u32,
    pub images: Vec<String>,
    pub feature_ids: Vec<String>,
    pub features: Vec<String>,
    pub menu_items: Vec<String>,
    pub featured: Vec<String>,
}

impl Venue {
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Display-ready menu item for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub category: ItemCategory,
    pub name: String,
    pub description: String,
    pub tag_ids: Vec<String>,
    pub tags: Vec<String>,
    pub ingredient_ids: Vec<String>,
    pub ingredients: Vec<String>,
    pub rating: f64,
    pub price_range: Option<ValueRange>,
    pub rating_range: Option<ValueRange>,
    pub image: Option<String>,
}

/// Display-ready variation for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVariation {
    pub id: String,
    pub item_id: String,
    pub venue_id: String,
    pub price: f64,
    pub rating: f64,
    pub image: String,
    pub review: String,
}

/// Discriminator for mixed listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Venue,
    MenuItem,
}

/// A venue or a menu item in a mixed listing (search results, rankings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Venue(Venue),
    MenuItem(MenuItem),
}

impl CatalogEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogEntry::Venue(_) => EntryKind::Venue,
            CatalogEntry::MenuItem(_) => EntryKind::MenuItem,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CatalogEntry::Venue(venue) => &venue.id,
            CatalogEntry::MenuItem(item) => &item.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Venue(venue) => &venue.name,
            CatalogEntry::MenuItem(item) => &item.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CatalogEntry::Venue(venue) => &venue.description,
            CatalogEntry::MenuItem(item) => &item.description,
        }
    }

    pub fn as_venue(&self) -> Option<&Venue> {
        match self {
            CatalogEntry::Venue(venue) => Some(venue),
            CatalogEntry::MenuItem(_) => None,
        }
    }

    pub fn as_menu_item(&self) -> Option<&MenuItem> {
        match self {
            CatalogEntry::MenuItem(item) => Some(item),
            CatalogEntry::Venue(_) => None,
        }
    }
}

/// A served item paired with the variation served at one venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueMenuEntry {
    pub item: MenuItem,
    pub variation: ItemVariation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_empty_is_none() {
        assert_eq!(ValueRange::spanning(Vec::new()), None);
    }

    #[test]
    fn spanning_single_value_collapses() {
        let range = ValueRange::spanning([2.5]).unwrap();
        assert_eq!(range, ValueRange::new(2.5, 2.5));
        assert!(range.is_single());
    }

    #[test]
    fn spanning_is_order_independent() {
        let forward = ValueRange::spanning([1.5, 3.0, 1.9]).unwrap();
        let backward = ValueRange::spanning([1.9, 3.0, 1.5]).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward, ValueRange::new(1.5, 3.0));
    }

    #[test]
    fn is_within_requires_containment() {
        let range = ValueRange::new(1.5, 3.0);
        assert!(range.is_within(1.0, 3.0));
        assert!(range.is_within(1.5, 3.0));
        assert!(!range.is_within(0.0, 2.0));
        assert!(!range.is_within(2.0, 5.0));
    }

    #[test]
    fn price_tier_parse_and_order() {
        assert_eq!(PriceTier::parse("€€"), Some(PriceTier::Moderate));
        assert_eq!(PriceTier::parse("4"), Some(PriceTier::Premium));
        assert_eq!(PriceTier::parse("€€€€€"), None);
        assert!(PriceTier::Budget < PriceTier::Premium);
        let json = serde_json::to_string(&PriceTier::Upscale).unwrap();
        assert_eq!(json, "\"€€€\"");
    }

    #[test]
    fn venue_category_parse_accepts_aliases() {
        assert_eq!(VenueCategory::parse("Bodega"), Some(VenueCategory::Bodega));
        assert_eq!(VenueCategory::parse("restaurante"), Some(VenueCategory::Restaurant));
        assert_eq!(VenueCategory::parse("pub"), None);
    }

    #[test]
    fn entry_kind_is_serialized_as_tag() {
        let entry = CatalogEntry::MenuItem(MenuItem {
            id: "gilda".into(),
            category: ItemCategory::Seafood,
            name: "Gilda".into(),
            description: String::new(),
            tag_ids: vec![],
            tags: vec![],
            ingredient_ids: vec![],
            ingredients: vec![],
            rating: 4.2,
            price_range: None,
            rating_range: None,
            image: None,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["kind"], "menu_item");
        assert_eq!(entry.kind(), EntryKind::MenuItem);
        assert!(entry.as_venue().is_none());
    }
}
