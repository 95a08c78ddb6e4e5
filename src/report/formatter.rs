// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering of composed records.

use super::format::{format_price, format_price_range, format_rating, truncate_text};
use crate::audit::{AuditReport, NamespaceAudit};
use crate::types::{CatalogEntry, ItemVariation, MenuItem, Venue, VenueMenuEntry};
use colored::*;
use std::fmt::Write;

const DESCRIPTION_WIDTH: usize = 72;

/// Renders records as coloured text blocks. Every method returns the text
/// rather than printing it.
pub struct CatalogFormatter;

impl CatalogFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn venue_list(&self, venues: &[Venue]) -> String {
        if venues.is_empty() {
            return format!("{}\n", "No venues found".yellow());
        }
        let mut out = String::new();
        for (i, venue) in venues.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", i + 1, self.venue_line(venue));
        }
        out
    }

    pub fn venue_detail(
        &self,
        venue: &Venue,
        menu: &[VenueMenuEntry],
        featured: &[ItemVariation],
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", venue.name.bold().cyan());
        let _ = writeln!(
            out,
            "  {} · {} · {} · ★ {} ({} reviews)",
            venue.category,
            venue.location.neighborhood,
            venue.price_tier.symbol(),
            format_rating(venue.rating),
            venue.total_reviews
        );
        let _ = writeln!(out, "  {}", venue.location.address.dimmed());
        if !venue.description.is_empty() {
            let _ = writeln!(out, "\n  {}", venue.description);
        }
        if !venue.review.is_empty() {
            let _ = writeln!(out, "  {}", venue.review.italic());
        }
        if !venue.features.is_empty() {
            let _ = writeln!(out, "\n  {} {}", "Features:".bold(), venue.features.join(", "));
        }
        for (label, value) in [
            ("Phone", &venue.contact.phone),
            ("Web", &venue.contact.website),
            ("Instagram", &venue.contact.instagram),
        ] {
            if let Some(value) = value {
                let _ = writeln!(out, "  {} {}", format!("{}:", label).bold(), value);
            }
        }

        if !menu.is_empty() {
            let _ = writeln!(out, "\n  {}", "MENU".bold().yellow());
            for entry in menu {
                let star = if featured.iter().any(|f| f.id == entry.variation.id) {
                    "★".yellow().to_string()
                } else {
                    " ".to_string()
                };
                let _ = writeln!(
                    out,
                    "  {} {:<32} {:>10}  {}",
                    star,
                    entry.item.name,
                    format_price(entry.variation.price),
                    format_rating(entry.variation.rating)
                );
            }
        }
        out
    }

    pub fn menu_item_list(&self, items: &[MenuItem]) -> String {
        if items.is_empty() {
            return format!("{}\n", "No items found".yellow());
        }
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", i + 1, self.menu_item_line(item));
        }
        out
    }

    pub fn menu_item_detail(&self, item: &MenuItem, variations: &[ItemVariation]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", item.name.bold().cyan());
        let _ = writeln!(
            out,
            "  {} · {} · ★ {}",
            item.category,
            self.price_label(item),
            format_rating(item.rating)
        );
        if !item.description.is_empty() {
            let _ = writeln!(out, "\n  {}", item.description);
        }
        if !item.ingredients.is_empty() {
            let _ = writeln!(
                out,
                "\n  {} {}",
                "Ingredients:".bold(),
                item.ingredients.join(", ")
            );
        }
        if !item.tags.is_empty() {
            let _ = writeln!(out, "  {} {}", "Tags:".bold(), item.tags.join(", "));
        }
        if !variations.is_empty() {
            let _ = writeln!(out, "\n  {}", "SERVED AT".bold().yellow());
            out.push_str(&self.variation_rows(variations));
        }
        out
    }

    pub fn variation_list(&self, variations: &[ItemVariation]) -> String {
        if variations.is_empty() {
            return format!("{}\n", "No variations found".yellow());
        }
        self.variation_rows(variations)
    }

    pub fn variation_detail(&self, variation: &ItemVariation) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", variation.id.bold().cyan());
        let _ = writeln!(
            out,
            "  {} at {} · {} · ★ {}",
            variation.item_id,
            variation.venue_id,
            format_price(variation.price),
            format_rating(variation.rating)
        );
        if !variation.review.is_empty() {
            let _ = writeln!(out, "\n  {}", variation.review.italic());
        }
        let _ = writeln!(out, "  {}", variation.image.dimmed());
        out
    }

    /// Mixed listings (search results, rankings) with a kind label per row.
    pub fn entry_list(&self, entries: &[CatalogEntry]) -> String {
        if entries.is_empty() {
            return format!("{}\n", "No results".yellow());
        }
        let mut out = String::new();
        for (i, entry) in entries.iter().enumerate() {
            let (label, line) = match entry {
                CatalogEntry::Venue(venue) => ("venue".blue(), self.venue_line(venue)),
                CatalogEntry::MenuItem(item) => ("item".magenta(), self.menu_item_line(item)),
            };
            let _ = writeln!(out, "{:>3}. [{}] {}", i + 1, label, line);
        }
        out
    }

    pub fn audit(&self, report: &AuditReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} (reference: {})",
            "TRANSLATION AUDIT".bold().yellow(),
            report.reference
        );
        for locale in &report.locales {
            let status = if locale.is_clean() {
                "OK".green()
            } else {
                format!("{} issues", locale.issue_count()).red()
            };
            let _ = writeln!(out, "\n  {} [{}]", locale.locale.code().bold(), status);
            for namespace in &locale.namespaces {
                self.namespace_audit(&mut out, namespace);
            }
        }
        let _ = writeln!(out);
        if report.is_clean() {
            let _ = writeln!(out, "{}", "All locales complete".green().bold());
        } else {
            let _ = writeln!(
                out,
                "{}",
                format!("{} translation issues", report.issue_count()).red().bold()
            );
        }
        out
    }

    fn namespace_audit(&self, out: &mut String, audit: &NamespaceAudit) {
        if let Some(error) = &audit.load_error {
            let _ = writeln!(out, "    {}: {}", audit.namespace, error.red());
            return;
        }
        for (label, keys) in [
            ("missing", &audit.missing_entries),
            ("missing field", &audit.missing_fields),
            ("untranslated", &audit.untranslated),
        ] {
            for key in keys {
                let _ = writeln!(out, "    {}: {} {}", audit.namespace, label.red(), key);
            }
        }
        for key in &audit.extra_entries {
            let _ = writeln!(out, "    {}: {} {}", audit.namespace, "extra".dimmed(), key);
        }
    }

    fn venue_line(&self, venue: &Venue) -> String {
        format!(
            "{} {} · {} · {} · {} · ★ {}",
            venue.name.bold(),
            format!("({})", venue.id).dimmed(),
            venue.category,
            venue.location.neighborhood,
            venue.price_tier.symbol(),
            format_rating(venue.rating)
        )
    }

    fn menu_item_line(&self, item: &MenuItem) -> String {
        let mut line = format!(
            "{} {} · {} · {}",
            item.name.bold(),
            format!("({})", item.id).dimmed(),
            item.category,
            self.price_label(item)
        );
        if let Some(range) = item.rating_range {
            let _ = write!(line, " · ★ {}", format_rating(range.max));
        }
        if !item.description.is_empty() {
            let _ = write!(
                line,
                "\n       {}",
                truncate_text(&item.description, DESCRIPTION_WIDTH).dimmed()
            );
        }
        line
    }

    fn variation_rows(&self, variations: &[ItemVariation]) -> String {
        let mut out = String::new();
        for variation in variations {
            let _ = writeln!(
                out,
                "    {:<28} {:>10}  ★ {}",
                variation.venue_id,
                format_price(variation.price),
                format_rating(variation.rating)
            );
        }
        out
    }

    fn price_label(&self, item: &MenuItem) -> String {
        format_price_range(item.price_range).unwrap_or_else(|| "—".to_string())
    }
}

impl Default for CatalogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::query::Catalog;

    fn plain() -> (Catalog, CatalogFormatter) {
        colored::control::set_override(false);
        (Catalog::embedded().unwrap(), CatalogFormatter::new())
    }

    #[test]
    fn venue_detail_lists_menu_with_prices() {
        let (catalog, formatter) = plain();
        let venue = catalog.get_venue("bar-soriano", Locale::Es).unwrap();
        let menu = catalog.venue_menu("bar-soriano", Locale::Es);
        let featured = catalog.featured_variations("bar-soriano", Locale::Es);
        let text = formatter.venue_detail(&venue, &menu, &featured);
        assert!(text.contains("Bar Soriano"));
        assert!(text.contains("Champiñón a la plancha"));
        assert!(text.contains("1,50 €"));
    }

    #[test]
    fn item_without_variations_shows_dash() {
        let (catalog, formatter) = plain();
        let item = catalog.get_menu_item("oreja-rebozada", Locale::En).unwrap();
        assert!(formatter.menu_item_list(&[item]).contains("—"));
    }

    #[test]
    fn empty_lists_say_so() {
        let (_, formatter) = plain();
        assert!(formatter.venue_list(&[]).contains("No venues found"));
        assert!(formatter.entry_list(&[]).contains("No results"));
    }

    #[test]
    fn clean_audit_summary() {
        let (catalog, formatter) = plain();
        let text = formatter.audit(&catalog.audit());
        assert!(text.contains("All locales complete"));
    }
}
