// SPDX-License-Identifier: PMPL-1.0-or-later

//! pintxo-catalog: browse a multilingual catalog of pintxo bars from the terminal
//!
//! Every listing is composed for one locale; `--locale` accepts any of the
//! seven supported codes (with or without a region subtag) and anything else
//! falls back to Spanish.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use pintxo_catalog::config::CatalogConfig;
use pintxo_catalog::report::{CatalogFormatter, OutputFormat};
use pintxo_catalog::{
    ContentFilter, DirectorySource, ItemCategory, ItemFilter, PriceTier, RankingQuery, SortKey,
    SortOrder, VenueCategory, VenueFilter,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pintxo-catalog")]
#[command(version)]
#[command(about = "Browse pintxo bars, their menus and rankings in seven languages")]
#[command(long_about = None)]
struct Cli {
    /// Locale code (es, en, fr, ca, pt, de, it)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Config file (default: ./pintxo-catalog.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Translation bundle tree: <DIR>/<locale>/<namespace>.json
    #[arg(long, global = true, value_name = "DIR")]
    translations: Option<PathBuf>,

    /// Directory with venues.json, items.json and variations.json
    #[arg(long, global = true, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List venues
    Venues {
        #[arg(long, value_parser = parse_venue_category)]
        category: Option<VenueCategory>,

        /// Exact neighborhood name
        #[arg(long)]
        neighborhood: Option<String>,

        /// Price tier as € symbols or 1-4
        #[arg(long, value_parser = parse_price_tier)]
        tier: Option<PriceTier>,

        #[arg(long, value_enum)]
        sort: Option<SortKeyArg>,

        /// Defaults to the natural order of the sort key
        #[arg(long, value_enum)]
        order: Option<SortOrderArg>,
    },

    /// Show one venue with its menu
    Venue {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List menu items
    Items {
        /// Only items served at this venue
        #[arg(long, value_name = "VENUE_ID")]
        venue: Option<String>,

        /// Tag id, e.g. vegetarian
        #[arg(long)]
        tag: Option<String>,

        #[arg(long, value_parser = parse_item_category)]
        category: Option<ItemCategory>,

        /// Price bounds; an item matches when its whole price range fits
        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        /// Rating bounds, same containment rule as prices
        #[arg(long)]
        min_rating: Option<f64>,

        #[arg(long)]
        max_rating: Option<f64>,

        #[arg(long, value_enum)]
        sort: Option<SortKeyArg>,

        #[arg(long, value_enum)]
        order: Option<SortOrderArg>,
    },

    /// Show one menu item with every venue serving it
    Item {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List the variations of a menu item
    Variations {
        #[arg(value_name = "ITEM_ID")]
        item_id: String,
    },

    /// Show one variation
    Variation {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Search venues and menu items by text in the chosen locale
    Search {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },

    /// Best-rated venues
    Top {
        #[arg(short, default_value = "5")]
        n: usize,
    },

    /// Combined venue and menu item ranking
    Rankings {
        #[arg(long, value_enum, default_value = "all")]
        content: ContentArg,

        /// Venue category (items are not affected)
        #[arg(long, value_parser = parse_venue_category)]
        category: Option<VenueCategory>,

        /// Venue price tier (items are not affected)
        #[arg(long, value_parser = parse_price_tier)]
        tier: Option<PriceTier>,

        #[arg(long, value_enum, default_value = "rating")]
        sort: SortKeyArg,

        #[arg(long, value_enum)]
        order: Option<SortOrderArg>,
    },

    /// Check every locale's translations against Spanish
    Check,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SortKeyArg {
    Name,
    Rating,
    Price,
    Popularity,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::Rating => SortKey::Rating,
            SortKeyArg::Price => SortKey::Price,
            SortKeyArg::Popularity => SortKey::Popularity,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Asc => SortOrder::Ascending,
            SortOrderArg::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ContentArg {
    All,
    Venues,
    Items,
    Bodegas,
}

impl From<ContentArg> for ContentFilter {
    fn from(arg: ContentArg) -> Self {
        match arg {
            ContentArg::All => ContentFilter::All,
            ContentArg::Venues => ContentFilter::Venues,
            ContentArg::Items => ContentFilter::MenuItems,
            ContentArg::Bodegas => ContentFilter::Bodegas,
        }
    }
}

fn parse_venue_category(value: &str) -> Result<VenueCategory, String> {
    VenueCategory::parse(value).ok_or_else(|| {
        let known: Vec<&str> = VenueCategory::all().iter().map(|c| c.as_str()).collect();
        format!("unknown category '{}' (expected {})", value, known.join(", "))
    })
}

fn parse_item_category(value: &str) -> Result<ItemCategory, String> {
    ItemCategory::all()
        .iter()
        .copied()
        .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| {
            let known: Vec<&str> = ItemCategory::all().iter().map(|c| c.as_str()).collect();
            format!("unknown item category '{}' (expected {})", value, known.join(", "))
        })
}

fn parse_price_tier(value: &str) -> Result<PriceTier, String> {
    PriceTier::parse(value).ok_or_else(|| format!("unknown price tier '{}' (use € to €€€€ or 1-4)", value))
}

/// Sort key and order for a listing; `None` keeps base order.
fn ordering(sort: Option<SortKeyArg>, order: Option<SortOrderArg>) -> Option<(SortKey, SortOrder)> {
    let key = SortKey::from(sort?);
    Some((key, order.map_or_else(|| key.default_order(), SortOrder::from)))
}

/// Missing bounds default to the open end of the scale.
fn bounds(min: Option<f64>, max: Option<f64>) -> Option<(f64, f64)> {
    if min.is_none() && max.is_none() {
        return None;
    }
    Some((min.unwrap_or(0.0), max.unwrap_or(f64::INFINITY)))
}

fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    if format.is_text() {
        print!("{}", text());
    } else {
        println!("{}", format.serialize(value)?);
    }
    Ok(())
}

fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp(None);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("reading working directory")?;
    let (mut config, config_warning) = match CatalogConfig::discover(cli.config.as_deref(), &cwd) {
        Ok(config) => (config, None),
        Err(err) if cli.config.is_none() => (CatalogConfig::default(), Some(err)),
        Err(err) => return Err(err).context("loading config"),
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config
            .log_level()
            .context("reading log_level from config")?
            .unwrap_or(LevelFilter::Warn)
    };
    init_logging(level);
    if let Some(err) = config_warning {
        log::warn!("ignoring {}: {}", pintxo_catalog::config::DEFAULT_CONFIG_FILE, err);
    }

    if let Some(locale) = cli.locale {
        config.locale = Some(locale);
    }
    if let Some(dir) = cli.translations {
        config.translations_dir = Some(dir);
    }
    if let Some(dir) = cli.data {
        config.data_dir = Some(dir);
    }

    let locale = config.locale();
    log::debug!("using locale {} ({})", locale, locale.english_name());
    let catalog = config.build_catalog().context("loading catalog data")?;
    let formatter = CatalogFormatter::new();
    let format = cli.format;

    match cli.command {
        Commands::Venues {
            category,
            neighborhood,
            tier,
            sort,
            order,
        } => {
            let filter = VenueFilter {
                category,
                neighborhood,
                price_tier: tier,
            };
            let mut venues = filter.apply(catalog.list_venues(locale));
            if let Some((key, order)) = ordering(sort, order) {
                pintxo_catalog::query::sort_venues(&mut venues, key, order, locale);
            }
            emit(format, &venues, || formatter.venue_list(&venues))?;
        }

        Commands::Venue { id } => {
            let Some(venue) = catalog.get_venue(&id, locale) else {
                bail!("no venue with id '{}'", id);
            };
            let menu = catalog.venue_menu(&id, locale);
            let featured = catalog.featured_variations(&id, locale);
            #[derive(Serialize)]
            struct VenuePage<'a> {
                venue: &'a pintxo_catalog::Venue,
                menu: &'a [pintxo_catalog::VenueMenuEntry],
                featured: &'a [pintxo_catalog::ItemVariation],
            }
            let page = VenuePage {
                venue: &venue,
                menu: &menu,
                featured: &featured,
            };
            emit(format, &page, || formatter.venue_detail(&venue, &menu, &featured))?;
        }

        Commands::Items {
            venue,
            tag,
            category,
            min_price,
            max_price,
            min_rating,
            max_rating,
            sort,
            order,
        } => {
            let items = match &venue {
                Some(venue_id) => {
                    if catalog.data().venue(venue_id).is_none() {
                        bail!("no venue with id '{}'", venue_id);
                    }
                    catalog.list_items_by_venue(venue_id, locale)
                }
                None => catalog.list_menu_items(locale),
            };
            let filter = ItemFilter {
                category,
                tag,
                price: bounds(min_price, max_price),
                rating: bounds(min_rating, max_rating),
            };
            let mut items = filter.apply(items);
            if let Some((key, order)) = ordering(sort, order) {
                pintxo_catalog::query::sort_menu_items(&mut items, key, order, locale);
            }
            emit(format, &items, || formatter.menu_item_list(&items))?;
        }

        Commands::Item { id } => {
            let Some(item) = catalog.get_menu_item(&id, locale) else {
                bail!("no menu item with id '{}'", id);
            };
            let variations = catalog.list_item_variations(&id, locale);
            emit(format, &item, || formatter.menu_item_detail(&item, &variations))?;
        }

        Commands::Variations { item_id } => {
            if catalog.data().item(&item_id).is_none() {
                bail!("no menu item with id '{}'", item_id);
            }
            let variations = catalog.list_item_variations(&item_id, locale);
            emit(format, &variations, || formatter.variation_list(&variations))?;
        }

        Commands::Variation { id } => {
            let Some(variation) = catalog.get_item_variation(&id, locale) else {
                bail!("no variation with id '{}'", id);
            };
            emit(format, &variation, || formatter.variation_detail(&variation))?;
        }

        Commands::Search { query } => {
            let results = catalog.search(&query, locale);
            emit(format, &results, || formatter.entry_list(&results))?;
        }

        Commands::Top { n } => {
            let venues = catalog.top_rated_venues(n, locale);
            emit(format, &venues, || formatter.venue_list(&venues))?;
        }

        Commands::Rankings {
            content,
            category,
            tier,
            sort,
            order,
        } => {
            let sort = SortKey::from(sort);
            let query = RankingQuery {
                content: content.into(),
                category,
                price_tier: tier,
                sort,
                order: order.map_or_else(|| sort.default_order(), SortOrder::from),
            };
            let ranked = catalog.rankings(locale, &query);
            emit(format, &ranked, || formatter.entry_list(&ranked))?;
        }

        Commands::Check => {
            let report = catalog.audit();
            emit(format, &report, || formatter.audit(&report))?;
            if let Some(dir) = &config.translations_dir {
                for path in DirectorySource::new(dir).stray_files() {
                    log::warn!("stray translation file {}", path.display());
                }
            }
            if !report.is_clean() {
                bail!("translation check found {} issues", report.issue_count());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ordering_uses_key_default() {
        assert_eq!(
            ordering(Some(SortKeyArg::Rating), None),
            Some((SortKey::Rating, SortOrder::Descending))
        );
        assert_eq!(
            ordering(Some(SortKeyArg::Rating), Some(SortOrderArg::Asc)),
            Some((SortKey::Rating, SortOrder::Ascending))
        );
        assert_eq!(ordering(None, Some(SortOrderArg::Desc)), None);
    }

    #[test]
    fn open_bounds() {
        assert_eq!(bounds(None, None), None);
        assert_eq!(bounds(Some(1.0), None), Some((1.0, f64::INFINITY)));
        assert_eq!(bounds(None, Some(2.0)), Some((0.0, 2.0)));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pintxo-catalog",
            "items",
            "--tag",
            "vegetarian",
            "--locale",
            "en-GB",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.locale.as_deref(), Some("en-GB"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Items { tag: Some(_), .. }));
    }

    #[test]
    fn tier_accepts_symbols_and_numbers() {
        assert_eq!(parse_price_tier("€€"), Ok(PriceTier::Moderate));
        assert_eq!(parse_price_tier("3"), Ok(PriceTier::Upscale));
        assert!(parse_price_tier("cheap").is_err());
        assert_eq!(parse_item_category("Seafood"), Ok(ItemCategory::Seafood));
    }
}
