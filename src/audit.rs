// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation completeness audit.
//!
//! Every locale is compared with the default locale, namespace by
//! namespace: entries and fields the default has and the locale lacks, and
//! entries the locale has that the default does not. Base data is checked
//! too, so an id with no text in some locale shows up before a page renders
//! its raw id. The audit reads the source directly; the loader's fallback
//! would hide exactly what it looks for.

use crate::bundle::{groups, Bundle, Namespace, TranslationSource};
use crate::data::BaseData;
use crate::i18n::{Locale, DEFAULT_LOCALE};
use crate::query::Catalog;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;

/// Findings for one locale and namespace. Fields are `id.field` paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamespaceAudit {
    pub namespace: Namespace,
    pub missing_entries: Vec<String>,
    pub missing_fields: Vec<String>,
    pub extra_entries: Vec<String>,
    /// Base ids (or `group.term` paths for the common namespace) with no text.
    pub untranslated: Vec<String>,
    pub load_error: Option<String>,
}

impl NamespaceAudit {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            missing_entries: Vec::new(),
            missing_fields: Vec::new(),
            extra_entries: Vec::new(),
            untranslated: Vec::new(),
            load_error: None,
        }
    }

    pub fn issue_count(&self) -> usize {
        self.missing_entries.len()
            + self.missing_fields.len()
            + self.untranslated.len()
            + usize::from(self.load_error.is_some())
    }

    /// Extra entries are reported but do not make a namespace unclean.
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleAudit {
    pub locale: Locale,
    pub namespaces: Vec<NamespaceAudit>,
}

impl LocaleAudit {
    pub fn issue_count(&self) -> usize {
        self.namespaces.iter().map(NamespaceAudit::issue_count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.namespaces.iter().all(NamespaceAudit::is_clean)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub reference: Locale,
    pub locales: Vec<LocaleAudit>,
}

impl AuditReport {
    pub fn issue_count(&self) -> usize {
        self.locales.iter().map(LocaleAudit::issue_count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.locales.iter().all(LocaleAudit::is_clean)
    }

    pub fn locale(&self, locale: Locale) -> Option<&LocaleAudit> {
        self.locales.iter().find(|audit| audit.locale == locale)
    }
}

/// Audit every supported locale in `source` against `data`.
pub fn audit(source: &dyn TranslationSource, data: &BaseData) -> AuditReport {
    let references: Vec<(Namespace, Option<Bundle>)> = Namespace::all()
        .iter()
        .map(|&namespace| (namespace, source.load(DEFAULT_LOCALE, namespace).ok()))
        .collect();

    let locales = Locale::all()
        .par_iter()
        .map(|&locale| {
            log::debug!("auditing {} against {}", locale, DEFAULT_LOCALE);
            LocaleAudit {
                locale,
                namespaces: references
                    .iter()
                    .map(|(namespace, reference)| {
                        audit_namespace(source, data, locale, *namespace, reference.as_ref())
                    })
                    .collect(),
            }
        })
        .collect();

    AuditReport {
        reference: DEFAULT_LOCALE,
        locales,
    }
}

fn audit_namespace(
    source: &dyn TranslationSource,
    data: &BaseData,
    locale: Locale,
    namespace: Namespace,
    reference: Option<&Bundle>,
) -> NamespaceAudit {
    let mut report = NamespaceAudit::new(namespace);

    let bundle = match source.load(locale, namespace) {
        Ok(bundle) => bundle,
        Err(err) => {
            report.load_error = Some(err.to_string());
            return report;
        }
    };

    if let Some(reference) = reference.filter(|_| locale != DEFAULT_LOCALE) {
        for (id, fields) in reference.entries() {
            match bundle.entry(id) {
                None => report.missing_entries.push(id.to_string()),
                Some(local) => report.missing_fields.extend(
                    fields
                        .keys()
                        .filter(|field| !local.contains_key(*field))
                        .map(|field| format!("{}.{}", id, field)),
                ),
            }
        }
        report.extra_entries = bundle
            .ids()
            .filter(|id| reference.entry(id).is_none())
            .map(str::to_string)
            .collect();
    }

    report.untranslated = required_keys(data, namespace)
        .into_iter()
        .filter(|(id, field)| match field {
            Some(field) => bundle.text(id, field).is_none(),
            None => bundle.entry(id).is_none(),
        })
        .map(|(id, field)| match field {
            Some(field) => format!("{}.{}", id, field),
            None => id,
        })
        .collect();

    report
}

/// Keys a namespace must carry for `data` to render without raw ids.
fn required_keys(data: &BaseData, namespace: Namespace) -> Vec<(String, Option<String>)> {
    let entity = |id: &str| (id.to_string(), None);
    match namespace {
        Namespace::Venues => data.venues().iter().map(|v| entity(&v.id)).collect(),
        Namespace::MenuItems => data.items().iter().map(|i| entity(&i.id)).collect(),
        Namespace::Variations => data.variations().iter().map(|v| entity(&v.id)).collect(),
        Namespace::Common => {
            let term = |group: &str, terms: BTreeSet<&str>| {
                terms
                    .into_iter()
                    .map(|id| (group.to_string(), Some(id.to_string())))
                    .collect::<Vec<_>>()
            };
            let mut keys = term(
                groups::INGREDIENTS,
                data.items()
                    .iter()
                    .flat_map(|i| i.ingredients.iter().map(String::as_str))
                    .collect(),
            );
            keys.extend(term(
                groups::TAGS,
                data.items()
                    .iter()
                    .flat_map(|i| i.tags.iter().map(String::as_str))
                    .collect(),
            ));
            keys.extend(term(
                groups::FEATURES,
                data.venues()
                    .iter()
                    .flat_map(|v| v.features.iter().map(String::as_str))
                    .collect(),
            ));
            keys
        }
    }
}

impl Catalog {
    /// Audit the catalog's own translation source.
    pub fn audit(&self) -> AuditReport {
        audit(self.bundles().source(), self.data())
    }
}
