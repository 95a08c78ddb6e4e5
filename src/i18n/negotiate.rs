// SPDX-License-Identifier: PMPL-1.0-or-later

//! Request locale negotiation.
//!
//! The site prefixes every path with a locale (`/en/bars`). Requests without
//! one are redirected to the locale picked here.

use super::locale::{Locale, DEFAULT_LOCALE};

/// Pick the locale for a request.
///
/// A supported `cookie` value wins outright. Otherwise the Accept-Language
/// header is scanned in list order (quality values are ignored) and the first
/// tag whose primary subtag is supported is used. Falls back to
/// [`DEFAULT_LOCALE`].
pub fn negotiate(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = cookie.and_then(Locale::from_code) {
        return locale;
    }

    accept_language
        .into_iter()
        .flat_map(|header| header.split(','))
        .map(|entry| entry.split(';').next().unwrap_or_default())
        .find_map(Locale::parse_lenient)
        .unwrap_or(DEFAULT_LOCALE)
}

/// The locale carried by the first segment of a site path, if any.
///
/// `"/en"` and `"/en/bars"` carry English; `"/bars"` and `"/english"` carry
/// nothing.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    let first = path.trim_start_matches('/').split('/').next()?;
    Locale::from_code(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_wins_over_header() {
        assert_eq!(negotiate(Some("ca"), Some("en-US,en;q=0.9")), Locale::Ca);
    }

    #[test]
    fn unsupported_cookie_is_ignored() {
        assert_eq!(negotiate(Some("ja"), Some("fr-FR,fr;q=0.9")), Locale::Fr);
    }

    #[test]
    fn header_list_order_decides() {
        assert_eq!(
            negotiate(None, Some("ja;q=1.0, de-AT;q=0.8, en;q=0.9")),
            Locale::De
        );
    }

    #[test]
    fn nothing_supported_falls_back() {
        assert_eq!(negotiate(None, Some("ja, zh-CN")), Locale::Es);
        assert_eq!(negotiate(None, None), Locale::Es);
        assert_eq!(negotiate(None, Some("")), Locale::Es);
    }

    #[test]
    fn path_prefix() {
        assert_eq!(locale_from_path("/en/bars"), Some(Locale::En));
        assert_eq!(locale_from_path("/it"), Some(Locale::It));
        assert_eq!(locale_from_path("/bars/bar-soriano"), None);
        assert_eq!(locale_from_path("/english/bars"), None);
        assert_eq!(locale_from_path("/"), None);
    }
}
