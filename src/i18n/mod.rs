// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale handling for the catalog.
//!
//! ## Supported locales
//!
//! | Code | Language   | Native name |
//! |------|------------|-------------|
//! | es   | Spanish    | Español     |
//! | en   | English    | English     |
//! | fr   | French     | Français    |
//! | ca   | Catalan    | Català      |
//! | pt   | Portuguese | Português   |
//! | de   | German     | Deutsch     |
//! | it   | Italian    | Italiano    |
//!
//! ## Design
//!
//! The locale set is closed. Anything outside it resolves to Spanish, the
//! default, without an error: [`Locale::resolve`] is the only entry point the
//! query layer needs for untrusted input. [`negotiate`] picks a locale for a
//! request the same way: cookie first, then the Accept-Language list, then
//! the default.

mod locale;
mod negotiate;

pub use locale::{Locale, DEFAULT_LOCALE};
pub use negotiate::{locale_from_path, negotiate};
