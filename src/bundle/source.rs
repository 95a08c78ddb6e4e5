// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where bundles come from.
//!
//! The composer only ever sees [`TranslationSource::load`]. The crate ships
//! three sources: the bundles embedded at compile time, a filesystem tree
//! laid out as `<root>/<locale>/<namespace>.json`, and an in-memory map.

use super::{Bundle, Namespace};
use crate::error::BundleError;
use crate::i18n::Locale;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Capability to produce one locale's bundle for one namespace.
///
/// Implementations report failure honestly; the fallback policy lives in
/// [`super::BundleLoader`].
pub trait TranslationSource: Send + Sync {
    fn load(&self, locale: Locale, namespace: Namespace) -> Result<Bundle, BundleError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

// ─── Embedded ───────────────────────────────────────────────────────

macro_rules! locale_bundles {
    ($code:literal) => {
        [
            include_str!(concat!("../../data/locales/", $code, "/bars.json")),
            include_str!(concat!("../../data/locales/", $code, "/pintxos.json")),
            include_str!(concat!("../../data/locales/", $code, "/pintxo-variations.json")),
            include_str!(concat!("../../data/locales/", $code, "/common.json")),
        ]
    };
}

const ES: [&str; 4] = locale_bundles!("es");
const EN: [&str; 4] = locale_bundles!("en");
const FR: [&str; 4] = locale_bundles!("fr");
const CA: [&str; 4] = locale_bundles!("ca");
const PT: [&str; 4] = locale_bundles!("pt");
const DE: [&str; 4] = locale_bundles!("de");
const IT: [&str; 4] = locale_bundles!("it");

/// Bundles compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    fn raw(locale: Locale, namespace: Namespace) -> &'static str {
        let set = match locale {
            Locale::Es => &ES,
            Locale::En => &EN,
            Locale::Fr => &FR,
            Locale::Ca => &CA,
            Locale::Pt => &PT,
            Locale::De => &DE,
            Locale::It => &IT,
        };
        match namespace {
            Namespace::Venues => set[0],
            Namespace::MenuItems => set[1],
            Namespace::Variations => set[2],
            Namespace::Common => set[3],
        }
    }
}

impl TranslationSource for EmbeddedSource {
    fn load(&self, locale: Locale, namespace: Namespace) -> Result<Bundle, BundleError> {
        let origin = format!("embedded:{}/{}.json", locale, namespace);
        Bundle::from_json(&origin, Self::raw(locale, namespace))
    }

    fn describe(&self) -> String {
        "embedded bundles".to_string()
    }
}

// ─── Filesystem ─────────────────────────────────────────────────────

/// Bundles read from `<root>/<locale>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bundle_path(&self, locale: Locale, namespace: Namespace) -> PathBuf {
        self.root
            .join(locale.code())
            .join(format!("{}.json", namespace.file_stem()))
    }

    /// JSON files under the root that no locale/namespace pair maps to.
    /// Usually a misspelt locale directory or namespace file.
    pub fn stray_files(&self) -> Vec<PathBuf> {
        let mut stray: Vec<PathBuf> = WalkDir::new(&self.root)
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
            })
            .filter(|path| !self.is_bundle_path(path))
            .collect();
        stray.sort();
        stray
    }

    fn is_bundle_path(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        let parts: Vec<&str> = relative
            .iter()
            .filter_map(|part| part.to_str())
            .collect();
        match parts.as_slice() {
            &[locale, file] => {
                let stem = file.strip_suffix(".json").unwrap_or(file);
                Locale::from_code(locale).is_some() && Namespace::from_file_stem(stem).is_some()
            }
            _ => false,
        }
    }
}

impl TranslationSource for DirectorySource {
    fn load(&self, locale: Locale, namespace: Namespace) -> Result<Bundle, BundleError> {
        let path = self.bundle_path(locale, namespace);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(BundleError::Missing { locale, namespace });
            }
            Err(source) => return Err(BundleError::Io { path, source }),
        };
        Bundle::from_json(&path.display().to_string(), &content)
    }

    fn describe(&self) -> String {
        format!("bundle directory {}", self.root.display())
    }
}

// ─── In memory ──────────────────────────────────────────────────────

/// Bundles held in a map; anything not inserted is missing.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bundles: HashMap<(Locale, Namespace), Bundle>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: Locale, namespace: Namespace, bundle: Bundle) {
        self.bundles.insert((locale, namespace), bundle);
    }

    pub fn with_bundle(mut self, locale: Locale, namespace: Namespace, bundle: Bundle) -> Self {
        self.insert(locale, namespace, bundle);
        self
    }
}

impl TranslationSource for MemorySource {
    fn load(&self, locale: Locale, namespace: Namespace) -> Result<Bundle, BundleError> {
        self.bundles
            .get(&(locale, namespace))
            .cloned()
            .ok_or(BundleError::Missing { locale, namespace })
    }

    fn describe(&self) -> String {
        format!("{} in-memory bundles", self.bundles.len())
    }
}
