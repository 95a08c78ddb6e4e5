// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation bundles.
//!
//! A bundle is the text one locale provides for one namespace: a map from an
//! entity id (or a term group, for `common`) to a map of field name to text.
//!
//! ```json
//! { "bar-soriano": { "name": "Bar Soriano", "description": "..." } }
//! { "ingredients": { "garlic": "ajo" }, "tags": { "popular": "popular" } }
//! ```
//!
//! Bundles come from a [`TranslationSource`]; the [`BundleLoader`] owns the
//! fallback chain and the process-wide [`BundleCache`].

mod cache;
mod source;

pub use cache::{BundleCache, BundleLoader};
pub use source::{DirectorySource, EmbeddedSource, MemorySource, TranslationSource};

use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Text fields of one bundle entry, keyed by field name.
pub type BundleEntry = BTreeMap<String, String>;

/// Translation namespaces. The file stem is the external resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Venues,
    MenuItems,
    Variations,
    Common,
}

impl Namespace {
    pub fn file_stem(&self) -> &'static str {
        match self {
            Namespace::Venues => "bars",
            Namespace::MenuItems => "pintxos",
            Namespace::Variations => "pintxo-variations",
            Namespace::Common => "common",
        }
    }

    pub fn from_file_stem(stem: &str) -> Option<Self> {
        Namespace::all()
            .iter()
            .copied()
            .find(|namespace| namespace.file_stem() == stem)
    }

    pub fn all() -> &'static [Namespace] {
        &[
            Namespace::Venues,
            Namespace::MenuItems,
            Namespace::Variations,
            Namespace::Common,
        ]
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Term groups inside the `common` namespace.
pub mod groups {
    pub const INGREDIENTS: &str = "ingredients";
    pub const TAGS: &str = "tags";
    pub const FEATURES: &str = "features";
}

/// One locale's text for one namespace. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    entries: BTreeMap<String, BundleEntry>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse bundle JSON.
    ///
    /// The root must be an object. Object-valued members become entries and
    /// keep only their string-valued fields; deeper nesting and non-string
    /// leaves are UI strings this crate does not use and are skipped.
    pub fn from_json(origin: &str, json: &str) -> Result<Self, BundleError> {
        let value: Value = serde_json::from_str(json).map_err(|source| BundleError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let Value::Object(root) = value else {
            return Err(BundleError::NotAnObject {
                origin: origin.to_string(),
            });
        };

        let entries = root
            .into_iter()
            .filter_map(|(id, member)| match member {
                Value::Object(fields) => {
                    let fields = fields
                        .into_iter()
                        .filter_map(|(field, text)| match text {
                            Value::String(text) => Some((field, text)),
                            _ => None,
                        })
                        .collect();
                    Some((id, fields))
                }
                _ => None,
            })
            .collect();
        Ok(Self { entries })
    }

    /// Add or replace an entry; for building bundles in code.
    pub fn with_entry<I, K, V>(mut self, id: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(field, text)| (field.into(), text.into()))
            .collect();
        self.entries.insert(id.into(), fields);
        self
    }

    pub fn entry(&self, id: &str) -> Option<&BundleEntry> {
        self.entries.get(id)
    }

    pub fn text(&self, id: &str, field: &str) -> Option<&str> {
        self.entries.get(id)?.get(field).map(String::as_str)
    }

    /// The term dictionary for a `common` group.
    pub fn terms(&self, group: &str) -> TermDictionary<'_> {
        TermDictionary {
            terms: self.entries.get(group),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &BundleEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Locale-scoped term id to display text map.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermDictionary<'a> {
    terms: Option<&'a BundleEntry>,
}

impl<'a> TermDictionary<'a> {
    pub fn empty() -> Self {
        Self { terms: None }
    }

    pub fn get(&self, id: &str) -> Option<&'a str> {
        self.terms?.get(id).map(String::as_str)
    }

    /// Display text for `id`; unknown ids pass through verbatim.
    pub fn resolve<'b>(&self, id: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.get(id).unwrap_or(id)
    }

    pub fn resolve_all(&self, ids: &[String]) -> Vec<String> {
        ids.iter().map(|id| self.resolve(id).to_string()).collect()
    }
}
