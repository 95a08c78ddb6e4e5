// SPDX-License-Identifier: PMPL-1.0-or-later

//! The closed set of catalog locales.

use serde::{Deserialize, Serialize};

/// Locale every lookup falls back to.
pub const DEFAULT_LOCALE: Locale = Locale::Es;

/// Supported content locales.
///
/// Each variant maps to an ISO 639-1 two-letter code. The order of
/// [`Locale::all`] is the display order of the site's language switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
    Fr,
    Ca,
    Pt,
    De,
    It,
}

impl Locale {
    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ca => "ca",
            Locale::Pt => "pt",
            Locale::De => "de",
            Locale::It => "it",
        }
    }

    /// Parse an exact ISO 639-1 code into a supported locale.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive; use
    /// [`Locale::resolve`] for request input.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "ca" => Some(Locale::Ca),
            "pt" => Some(Locale::Pt),
            "de" => Some(Locale::De),
            "it" => Some(Locale::It),
            _ => None,
        }
    }

    /// Lenient parse: trims, lowercases and drops any region subtag
    /// (`"en-GB"`, `"pt_BR"`) before matching. `None` when the primary
    /// subtag is not supported.
    pub fn parse_lenient(value: &str) -> Option<Locale> {
        let primary = value
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::from_code(&primary)
    }

    /// Resolve any locale string, substituting [`DEFAULT_LOCALE`] for
    /// anything unsupported. Never fails.
    ///
    /// ```
    /// use pintxo_catalog::i18n::Locale;
    /// assert_eq!(Locale::resolve("en"), Locale::En);
    /// assert_eq!(Locale::resolve("EN-us"), Locale::En);
    /// assert_eq!(Locale::resolve("xx"), Locale::Es);
    /// ```
    pub fn resolve(value: &str) -> Locale {
        Locale::parse_lenient(value).unwrap_or(DEFAULT_LOCALE)
    }

    /// All supported locales, in display order.
    pub fn all() -> &'static [Locale] {
        &[
            Locale::Es,
            Locale::En,
            Locale::Fr,
            Locale::Ca,
            Locale::Pt,
            Locale::De,
            Locale::It,
        ]
    }

    pub fn is_default(&self) -> bool {
        *self == DEFAULT_LOCALE
    }

    /// English name of the language.
    pub fn english_name(&self) -> &'static str {
        match self {
            Locale::Es => "Spanish",
            Locale::En => "English",
            Locale::Fr => "French",
            Locale::Ca => "Catalan",
            Locale::Pt => "Portuguese",
            Locale::De => "German",
            Locale::It => "Italian",
        }
    }

    /// Name of the language in the language itself, as shown in the
    /// language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Ca => "Català",
            Locale::Pt => "Português",
            Locale::De => "Deutsch",
            Locale::It => "Italiano",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for locale in Locale::all() {
            let parsed = Locale::from_code(locale.code()).expect("should parse");
            assert_eq!(*locale, parsed);
        }
    }

    #[test]
    fn seven_locales_default_spanish() {
        assert_eq!(Locale::all().len(), 7);
        assert_eq!(Locale::default(), Locale::Es);
        assert!(Locale::Es.is_default());
        assert!(!Locale::It.is_default());
    }

    #[test]
    fn from_code_is_strict() {
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code("en-GB"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn resolve_substitutes_default() {
        assert_eq!(Locale::resolve("ja"), Locale::Es);
        assert_eq!(Locale::resolve(""), Locale::Es);
        assert_eq!(Locale::resolve("  Fr "), Locale::Fr);
        assert_eq!(Locale::resolve("pt_BR"), Locale::Pt);
        assert_eq!(Locale::resolve("ca-ES"), Locale::Ca);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Locale::De).unwrap();
        assert_eq!(json, "\"de\"");
        let back: Locale = serde_json::from_str("\"it\"").unwrap();
        assert_eq!(back, Locale::It);
    }

    #[test]
    fn native_names_are_distinct() {
        let mut names: Vec<_> = Locale::all().iter().map(|l| l.native_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Locale::all().len());
    }
}
