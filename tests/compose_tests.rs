// SPDX-License-Identifier: PMPL-1.0-or-later

//! Composition and locale fallback through the public API.

use pintxo_catalog::bundle::groups;
use pintxo_catalog::compose::{compose_venue, derive_item_ranges};
use pintxo_catalog::*;

fn spanish_only() -> MemorySource {
    MemorySource::new()
        .with_bundle(
            Locale::Es,
            Namespace::Venues,
            Bundle::new().with_entry(
                "bar-soriano",
                [("name", "Bar Soriano"), ("description", "El del champi")],
            ),
        )
        .with_bundle(
            Locale::Es,
            Namespace::Common,
            Bundle::new().with_entry(groups::FEATURES, [("terrace", "terraza")]),
        )
}

#[test]
fn missing_locale_falls_back_to_spanish() {
    let catalog = Catalog::new(BaseData::embedded().unwrap(), spanish_only());
    let venue = catalog.get_venue("bar-soriano", Locale::De).unwrap();
    assert_eq!(venue.name, "Bar Soriano");
    assert_eq!(venue.description, "El del champi");
}

#[test]
fn missing_everywhere_shows_the_id() {
    let catalog = Catalog::new(BaseData::embedded().unwrap(), MemorySource::new());
    for venue in catalog.list_venues(Locale::Fr) {
        assert_eq!(venue.name, venue.id);
        assert_eq!(venue.description, "");
        assert_eq!(venue.features, venue.feature_ids);
    }
    for variation in catalog.list_item_variations("gilda", Locale::Fr) {
        assert_eq!(variation.review, "");
    }
}

#[test]
fn partial_bundle_leaves_other_records_untranslated() {
    let catalog = Catalog::new(BaseData::embedded().unwrap(), spanish_only());
    let angel = catalog.get_venue("bar-angel", Locale::Es).unwrap();
    assert_eq!(angel.name, "bar-angel");
    // Base fields survive untouched.
    assert_eq!(angel.price_tier, PriceTier::Budget);
    assert_eq!(angel.location.neighborhood, "Calle Laurel");
}

#[test]
fn composed_venue_keeps_base_fields() {
    let data = BaseData::embedded().unwrap();
    let base = data.venue("bodega-el-rioja").unwrap();
    let bundle = Bundle::new().with_entry(
        "bodega-el-rioja",
        [("name", "Bodega El Rioja"), ("review", "Great wine list")],
    );
    let common = Bundle::new().with_entry(groups::FEATURES, [("wine-list", "wine list")]);
    let venue = compose_venue(base, &bundle, &common, Locale::En);

    assert_eq!(venue.id, base.id);
    assert_eq!(venue.rating, base.rating);
    assert_eq!(venue.images, base.images);
    assert_eq!(venue.main_image(), base.images.first().map(String::as_str));
    assert_eq!(venue.review, "Great wine list");
    assert_eq!(venue.feature_ids, base.features);
    for (id, text) in venue.feature_ids.iter().zip(&venue.features) {
        if id == "wine-list" {
            assert_eq!(text, "wine list");
        } else {
            assert_eq!(text, id);
        }
    }
}

#[test]
fn embedded_terms_are_translated() {
    let catalog = Catalog::embedded().unwrap();
    let champi = catalog.get_menu_item("champinon-plancha", Locale::Es).unwrap();
    assert!(champi.ingredients.contains(&"champiñones".to_string()));
    assert!(champi.tags.contains(&"vegetariano".to_string()));
    assert_eq!(champi.ingredients.len(), champi.ingredient_ids.len());

    let soriano = catalog.get_venue("bar-soriano", Locale::Es).unwrap();
    assert!(soriano.features.contains(&"solo efectivo".to_string()));
}

#[test]
fn derived_ranges_from_base_data() {
    let data = BaseData::embedded().unwrap();
    let ranges = derive_item_ranges("tortilla-patatas", data.variations());
    assert_eq!(ranges.price_range, Some(ValueRange::new(1.6, 2.2)));
    assert_eq!(ranges.rating_range, Some(ValueRange::new(4.3, 4.5)));

    let none = derive_item_ranges("oreja-rebozada", data.variations());
    assert_eq!(none, ItemRanges::empty());
}
