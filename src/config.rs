// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog configuration, read from YAML.
//!
//! ```yaml
//! locale: en
//! translations_dir: ./locales   # <dir>/<locale>/<namespace>.json
//! data_dir: ./base              # venues.json, items.json, variations.json
//! log_level: info
//! ```
//!
//! Every field is optional. Without directories the catalog uses the data and
//! bundles compiled into the crate. Relative paths resolve against the
//! working directory.

use crate::bundle::{DirectorySource, EmbeddedSource};
use crate::data::BaseData;
use crate::error::{ConfigError, ConfigResult, DataResult};
use crate::i18n::Locale;
use crate::query::Catalog;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pintxo-catalog.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub locale: Option<String>,
    pub translations_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl CatalogConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(path, &text)
    }

    /// Parse YAML text; `path` only labels errors. An empty document is the
    /// default configuration.
    pub fn from_yaml(path: &Path, text: &str) -> ConfigResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The explicit file when given, else [`DEFAULT_CONFIG_FILE`] in `dir`
    /// when it exists, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Configured locale, resolved leniently; the default locale when unset.
    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::resolve)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> ConfigResult<Option<LevelFilter>> {
        self.log_level
            .as_deref()
            .map(|level| {
                LevelFilter::from_str(level.trim())
                    .map_err(|_| ConfigError::UnknownLogLevel(level.to_string()))
            })
            .transpose()
    }

    /// Build a catalog from the configured directories.
    pub fn build_catalog(&self) -> DataResult<Catalog> {
        let data = match &self.data_dir {
            Some(dir) => BaseData::from_dir(dir)?,
            None => BaseData::embedded()?,
        };
        Ok(match &self.translations_dir {
            Some(dir) => Catalog::new(data, DirectorySource::new(dir)),
            None => Catalog::new(data, EmbeddedSource),
        })
    }
}
