// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pintxo Catalog: a locale-aware catalog of pintxo bars and their menus.
//!
//! Venues, menu items and the per-venue variations of each item are stored
//! once as locale-independent base records. Every visible string lives in
//! per-locale translation bundles. A query merges the two for one locale and
//! hands back complete records.
//!
//! LAYERS:
//! 1. **Data**: base records, validated once at load ([`data::BaseData`]).
//! 2. **Bundles**: per-locale, per-namespace text with a cached loader that
//!    falls back to Spanish, then to nothing ([`bundle::BundleLoader`]).
//! 3. **Compose**: pure merge of one base record with one locale's text.
//! 4. **Query**: listings, lookups, search, filters, sorts and rankings
//!    ([`query::Catalog`]).
//!
//! ```
//! use pintxo_catalog::{Catalog, Locale};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let best = catalog.top_rated_venues(3, Locale::En);
//! assert_eq!(best.len(), 3);
//! assert!(best[0].rating >= best[1].rating);
//! ```

pub mod audit;
pub mod bundle;
pub mod compose;
pub mod config;
pub mod data;
pub mod error;
pub mod i18n;
pub mod query;
pub mod report;
pub mod types;

pub use audit::{audit, AuditReport};
pub use bundle::{Bundle, BundleLoader, DirectorySource, EmbeddedSource, MemorySource, Namespace, TranslationSource};
pub use config::CatalogConfig;
pub use data::BaseData;
pub use error::{BundleError, ConfigError, DataError};
pub use i18n::{negotiate, Locale, DEFAULT_LOCALE};
pub use query::{Catalog, ContentFilter, ItemFilter, RankingQuery, SortKey, SortOrder, VenueFilter};
pub use types::*;
