// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display helpers shared by every page: prices in euros the way the site
//! prints them (`1.234,50 €`), one-decimal ratings, and text truncation.

use crate::types::ValueRange;

const ELLIPSIS: &str = "...";

/// Two decimals, comma decimal mark, dot thousands separator, trailing euro sign.
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02} €", sign, grouped, cents % 100)
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// `None` for an item without variations; a single price when the range
/// collapses.
pub fn format_price_range(range: Option<ValueRange>) -> Option<String> {
    let range = range?;
    if range.is_single() {
        Some(format_price(range.min))
    } else {
        Some(format!(
            "{} – {}",
            format_price(range.min),
            format_price(range.max)
        ))
    }
}

/// At most `max_chars` characters plus `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", text[..cut].trim_end(), ELLIPSIS),
    }
}
