// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundle cache and the loader's fallback chain.
//!
//! Cache entries are write-once: two threads racing to fill the same key
//! compute equal bundles and the first insert wins. Nothing is evicted; the
//! cache lives as long as the catalog that owns it.

use super::{Bundle, Namespace, TranslationSource};
use crate::i18n::{Locale, DEFAULT_LOCALE};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

type CacheKey = (Locale, Namespace);

/// Read-through memo of loaded bundles keyed by locale and namespace.
#[derive(Debug, Default)]
pub struct BundleCache {
    entries: RwLock<HashMap<CacheKey, Arc<Bundle>>>,
}

impl BundleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: Locale, namespace: Namespace) -> Option<Arc<Bundle>> {
        // Entries are never mutated in place, so a poisoned lock still holds
        // consistent data.
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&(locale, namespace)).cloned()
    }

    /// Insert unless already present; returns the cached value either way.
    pub fn insert(&self, locale: Locale, namespace: Namespace, bundle: Arc<Bundle>) -> Arc<Bundle> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.entry((locale, namespace)).or_insert(bundle).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Loads bundles through the cache with locale fallback. Never fails.
pub struct BundleLoader {
    source: Box<dyn TranslationSource>,
    cache: BundleCache,
}

impl BundleLoader {
    pub fn new(source: impl TranslationSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    pub fn from_boxed(source: Box<dyn TranslationSource>) -> Self {
        Self {
            source,
            cache: BundleCache::new(),
        }
    }

    /// The bundle for `locale`/`namespace`.
    ///
    /// Falls back to the default locale's bundle when the source cannot
    /// provide one, then to an empty bundle. The outcome is cached under the
    /// requested key either way.
    pub fn load(&self, locale: Locale, namespace: Namespace) -> Arc<Bundle> {
        if let Some(bundle) = self.cache.get(locale, namespace) {
            return bundle;
        }

        let bundle = match self.source.load(locale, namespace) {
            Ok(bundle) => {
                log::debug!(
                    "loaded {} bundle for {} ({} entries) from {}",
                    namespace,
                    locale,
                    bundle.len(),
                    self.source.describe()
                );
                Arc::new(bundle)
            }
            Err(err) if locale != DEFAULT_LOCALE => {
                log::warn!("{}; falling back to {}", err, DEFAULT_LOCALE);
                self.load(DEFAULT_LOCALE, namespace)
            }
            Err(err) => {
                log::warn!("{}; using an empty bundle", err);
                Arc::new(Bundle::new())
            }
        };

        self.cache.insert(locale, namespace, bundle)
    }

    pub fn cache(&self) -> &BundleCache {
        &self.cache
    }

    pub fn source(&self) -> &dyn TranslationSource {
        self.source.as_ref()
    }
}

impl std::fmt::Debug for BundleLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleLoader")
            .field("source", &self.source.describe())
            .field("cached", &self.cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MemorySource;
    use crate::error::BundleError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        inner: MemorySource,
        loads: AtomicUsize,
    }

    impl TranslationSource for CountingSource {
        fn load(&self, locale: Locale, namespace: Namespace) -> Result<Bundle, BundleError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(locale, namespace)
        }

        fn describe(&self) -> String {
            "counting".into()
        }
    }

    fn spanish_only() -> MemorySource {
        MemorySource::new().with_bundle(
            Locale::Es,
            Namespace::Venues,
            Bundle::new().with_entry("bar-1", [("name", "Bar Uno")]),
        )
    }

    #[test]
    fn repeated_loads_hit_the_cache() {
        let source = Arc::new(CountingSource {
            inner: spanish_only(),
            loads: AtomicUsize::new(0),
        });
        let loader = BundleLoader::new(SharedSource(source.clone()));

        let first = loader.load(Locale::Es, Namespace::Venues);
        let second = loader.load(Locale::Es, Namespace::Venues);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_locale_falls_back_to_default() {
        let loader = BundleLoader::new(spanish_only());
        let bundle = loader.load(Locale::De, Namespace::Venues);
        assert_eq!(bundle.text("bar-1", "name"), Some("Bar Uno"));
        // Fallback result is shared with the default locale's entry.
        assert!(Arc::ptr_eq(&bundle, &loader.load(Locale::Es, Namespace::Venues)));
        assert_eq!(loader.cache().len(), 2);
    }

    #[test]
    fn missing_default_yields_empty_bundle() {
        let loader = BundleLoader::new(MemorySource::new());
        assert!(loader.load(Locale::Fr, Namespace::Common).is_empty());
        assert!(loader.load(Locale::Es, Namespace::Common).is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let loader = BundleLoader::new(spanish_only());
        loader.load(Locale::Es, Namespace::Venues);
        assert!(!loader.cache().is_empty());
        loader.cache().clear();
        assert!(loader.cache().is_empty());
    }

    #[test]
    fn insert_keeps_first_writer() {
        let cache = BundleCache::new();
        let first = Arc::new(Bundle::new().with_entry("a", [("name", "first")]));
        let second = Arc::new(Bundle::new().with_entry("a", [("name", "second")]));
        cache.insert(Locale::En, Namespace::Venues, first.clone());
        let kept = cache.insert(Locale::En, Namespace::Venues, second);
        assert!(Arc::ptr_eq(&kept, &first));
    }

    struct SharedSource(Arc<CountingSource>);

    impl TranslationSource for SharedSource {
        fn load(&self, locale: Locale, namespace: Namespace) -> Result<Bundle, BundleError> {
            self.0.load(locale, namespace)
        }

        fn describe(&self) -> String {
            self.0.describe()
        }
    }
}
