// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filesystem bundle trees, the translation audit and locale negotiation.

use pintxo_catalog::i18n::locale_from_path;
use pintxo_catalog::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A bundle tree holding Spanish and English venue names for the embedded
/// data, plus whatever the test adds.
fn bundle_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let data = BaseData::embedded().unwrap();
    let names = |suffix: &str| {
        let entries: Vec<String> = data
            .venues()
            .iter()
            .map(|v| format!("\"{}\": {{\"name\": \"{}{}\"}}", v.id, v.id, suffix))
            .collect();
        format!("{{{}}}", entries.join(", "))
    };
    write(dir.path(), "es/bars.json", &names(" (es)"));
    write(dir.path(), "en/bars.json", &names(" (en)"));
    dir
}

#[test]
fn directory_source_serves_each_locale() {
    let dir = bundle_tree();
    let catalog = Catalog::new(BaseData::embedded().unwrap(), DirectorySource::new(dir.path()));
    assert_eq!(
        catalog.get_venue("tondeluna", Locale::En).unwrap().name,
        "tondeluna (en)"
    );
    assert_eq!(
        catalog.get_venue("tondeluna", Locale::Es).unwrap().name,
        "tondeluna (es)"
    );
}

#[test]
fn malformed_bundle_falls_back_to_spanish() {
    let dir = bundle_tree();
    write(dir.path(), "fr/bars.json", "{ not json");
    let catalog = Catalog::new(BaseData::embedded().unwrap(), DirectorySource::new(dir.path()));
    assert_eq!(
        catalog.get_venue("bar-sebas", Locale::Fr).unwrap().name,
        "bar-sebas (es)"
    );
    // Absent file behaves the same way.
    assert_eq!(
        catalog.get_venue("bar-sebas", Locale::It).unwrap().name,
        "bar-sebas (es)"
    );
}

#[test]
fn directory_errors_are_typed() {
    let dir = bundle_tree();
    write(dir.path(), "de/bars.json", "[1, 2, 3]");
    let source = DirectorySource::new(dir.path());
    assert!(matches!(
        source.load(Locale::Pt, Namespace::Venues),
        Err(BundleError::Missing { locale: Locale::Pt, .. })
    ));
    assert!(matches!(
        source.load(Locale::De, Namespace::Venues),
        Err(BundleError::NotAnObject { .. })
    ));
    assert!(source.load(Locale::En, Namespace::Venues).is_ok());
}

#[test]
fn stray_files_are_reported() {
    let dir = bundle_tree();
    write(dir.path(), "xx/bars.json", "{}");
    write(dir.path(), "en/menu.json", "{}");
    write(dir.path(), "en/notes.txt", "not a bundle");
    let stray = DirectorySource::new(dir.path()).stray_files();
    let names: Vec<String> = stray
        .iter()
        .map(|path| {
            path.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(names, vec!["en/menu.json", "xx/bars.json"]);
}

#[test]
fn audit_flags_incomplete_tree() {
    let dir = bundle_tree();
    let report = audit(&DirectorySource::new(dir.path()), &BaseData::embedded().unwrap());
    assert!(!report.is_clean());

    let en = report.locale(Locale::En).unwrap();
    let venues = en
        .namespaces
        .iter()
        .find(|ns| ns.namespace == Namespace::Venues)
        .unwrap();
    assert!(venues.is_clean());
    let items = en
        .namespaces
        .iter()
        .find(|ns| ns.namespace == Namespace::MenuItems)
        .unwrap();
    assert!(items.load_error.is_some());
}

#[test]
fn audit_lists_untranslated_ids() {
    let dir = bundle_tree();
    write(dir.path(), "en/bars.json", r#"{"bar-soriano": {"name": "Bar Soriano"}}"#);
    let report = audit(&DirectorySource::new(dir.path()), &BaseData::embedded().unwrap());
    let venues = &report.locale(Locale::En).unwrap().namespaces[0];
    assert_eq!(venues.missing_entries.len(), 6);
    assert_eq!(venues.untranslated.len(), 6);
    assert!(!venues.untranslated.contains(&"bar-soriano".to_string()));
}

#[test]
fn embedded_catalog_audits_clean() {
    let report = Catalog::embedded().unwrap().audit();
    assert!(report.is_clean());
    assert_eq!(report.issue_count(), 0);
    assert_eq!(report.reference, DEFAULT_LOCALE);
}

#[test]
fn request_locale_negotiation() {
    assert_eq!(negotiate(Some("en"), Some("fr")), Locale::En);
    assert_eq!(negotiate(None, Some("pt-BR,pt;q=0.9,en;q=0.8")), Locale::Pt);
    assert_eq!(negotiate(None, Some("ja,zh")), Locale::Es);
    assert_eq!(negotiate(None, None), Locale::Es);
    assert_eq!(locale_from_path("/ca/pintxos/gilda"), Some(Locale::Ca));
    assert_eq!(locale_from_path("/pintxos"), None);
    assert_eq!(Locale::resolve("IT_it"), Locale::It);
    assert_eq!(Locale::resolve("klingon"), Locale::Es);
}

#[test]
fn config_points_catalog_at_directories() {
    let dir = bundle_tree();
    let config_path = dir.path().join("catalog.yaml");
    fs::write(
        &config_path,
        format!("locale: en\ntranslations_dir: {}\n", dir.path().display()),
    )
    .unwrap();
    let config = CatalogConfig::load(&config_path).unwrap();
    let catalog = config.build_catalog().unwrap();
    assert_eq!(
        catalog.get_venue("bar-angel", config.locale()).unwrap().name,
        "bar-angel (en)"
    );
}
