// SPDX-License-Identifier: PMPL-1.0-or-later

//! Composition of base records with one locale's text.
//!
//! Composition never fails. An entity without a translation entry keeps its
//! id as its name and gets empty text elsewhere, with a warning in the log.
//! Term ids (ingredients, tags, features) without a dictionary entry are
//! shown verbatim.

use crate::bundle::{groups, Bundle, BundleEntry};
use crate::i18n::Locale;
use crate::types::{
    ItemRanges, ItemVariation, MenuItem, MenuItemBase, ValueRange, VariationBase, Venue, VenueBase,
};

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const REVIEW: &str = "review";

/// Merge a venue with its entry in the venues bundle.
///
/// `common` supplies the feature dictionary.
pub fn compose_venue(base: &VenueBase, bundle: &Bundle, common: &Bundle, locale: Locale) -> Venue {
    let entry = translation(bundle, "venue", &base.id, locale);
    Venue {
        id: base.id.clone(),
        category: base.category,
        name: field(entry, NAME, &base.id),
        description: field(entry, DESCRIPTION, ""),
        review: field(entry, REVIEW, ""),
        location: base.location.clone(),
        contact: base.contact.clone(),
        price_tier: base.price_tier,
        rating: base.rating,
        total_reviews: base.total_reviews,
        images: base.images.clone(),
        feature_ids: base.features.clone(),
        features: common.terms(groups::FEATURES).resolve_all(&base.features),
        menu_items: base.menu_items.clone(),
        featured: base.featured.clone(),
    }
}

/// Merge a menu item with its entry in the items bundle, resolve its term
/// ids through `common`, and attach the ranges derived from `variations`.
pub fn compose_menu_item(
    base: &MenuItemBase,
    bundle: &Bundle,
    common: &Bundle,
    variations: &[VariationBase],
    locale: Locale,
) -> MenuItem {
    let entry = translation(bundle, "menu item", &base.id, locale);
    let ItemRanges {
        price_range,
        rating_range,
        image,
    } = derive_item_ranges(&base.id, variations);

    MenuItem {
        id: base.id.clone(),
        category: base.category,
        name: field(entry, NAME, &base.id),
        description: field(entry, DESCRIPTION, ""),
        tag_ids: base.tags.clone(),
        tags: common.terms(groups::TAGS).resolve_all(&base.tags),
        ingredient_ids: base.ingredients.clone(),
        ingredients: common.terms(groups::INGREDIENTS).resolve_all(&base.ingredients),
        rating: base.rating,
        price_range,
        rating_range,
        image,
    }
}

/// Merge a variation with its entry in the variations bundle.
pub fn compose_variation(base: &VariationBase, bundle: &Bundle, locale: Locale) -> ItemVariation {
    let entry = translation(bundle, "variation", &base.id, locale);
    ItemVariation {
        id: base.id.clone(),
        item_id: base.item_id.clone(),
        venue_id: base.venue_id.clone(),
        price: base.price,
        rating: base.rating,
        image: base.image.clone(),
        review: field(entry, REVIEW, ""),
    }
}

/// Price and rating ranges over every variation of `item_id`.
///
/// No variations gives all-`None`. The image is the first matching
/// variation's, in the order of `variations`.
pub fn derive_item_ranges(item_id: &str, variations: &[VariationBase]) -> ItemRanges {
    let matching: Vec<&VariationBase> = variations.iter().filter(|v| v.item_id == item_id).collect();
    let Some(first) = matching.first() else {
        return ItemRanges::empty();
    };

    ItemRanges {
        price_range: ValueRange::spanning(matching.iter().map(|v| v.price)),
        rating_range: ValueRange::spanning(matching.iter().map(|v| v.rating)),
        image: Some(first.image.clone()),
    }
}

fn translation<'a>(
    bundle: &'a Bundle,
    kind: &str,
    id: &str,
    locale: Locale,
) -> Option<&'a BundleEntry> {
    let entry = bundle.entry(id);
    if entry.is_none() {
        log::warn!("missing translations for {} {} in locale {}", kind, id, locale);
    }
    entry
}

fn field(entry: Option<&BundleEntry>, name: &str, fallback: &str) -> String {
    entry
        .and_then(|fields| fields.get(name))
        .map(String::as_str)
        .unwrap_or(fallback)
        .to_string()
}
