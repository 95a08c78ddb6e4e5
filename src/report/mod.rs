// SPDX-License-Identifier: PMPL-1.0-or-later

//! Presentation of query results: display formatting, coloured terminal
//! blocks and structured output.

pub mod format;
pub mod formatter;
pub mod output;

pub use format::{format_price, format_price_range, format_rating, truncate_text};
pub use formatter::CatalogFormatter;
pub use output::OutputFormat;
