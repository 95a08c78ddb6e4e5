// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the catalog.
//!
//! Only two kinds of failure are ever surfaced to a caller: broken base data
//! (caught when the catalog is built, never at query time) and a broken
//! configuration file. Translation problems are [`BundleError`]s, which the
//! bundle loader logs and turns into fallbacks.

use crate::bundle::Namespace;
use crate::i18n::Locale;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a translation bundle from a source.
#[derive(Error, Debug)]
pub enum BundleError {
    /// The source has no bundle for this locale and namespace
    #[error("no {namespace} bundle for locale {locale}")]
    Missing { locale: Locale, namespace: Namespace },

    /// Reading a bundle file failed
    #[error("could not read bundle {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bundle is not a two-level JSON object of strings
    #[error("could not parse bundle {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The bundle parsed but its root is not a JSON object
    #[error("bundle {origin} is not a JSON object")]
    NotAnObject { origin: String },
}

/// Base data violates an integrity rule.
#[derive(Error, Debug)]
pub enum DataError {
    /// A base data document could not be parsed
    #[error("could not parse {document}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// A base data file could not be read
    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two records of the same kind share an id
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A variation points at an item that does not exist
    #[error("variation {variation} references unknown item {item}")]
    UnknownItem { variation: String, item: String },

    /// A variation points at a venue that does not exist
    #[error("variation {variation} references unknown venue {venue}")]
    UnknownVenue { variation: String, venue: String },

    /// A variation price is negative, NaN or infinite
    #[error("variation {variation} has invalid price {price}")]
    InvalidPrice { variation: String, price: f64 },

    /// A rating is outside 0..=5 or not finite
    #[error("{kind} {id} has invalid rating {rating}")]
    InvalidRating {
        kind: &'static str,
        id: String,
        rating: f64,
    },

    /// A venue lists an item it has no link target for
    #[error("venue {venue} links unknown item {item}")]
    UnknownMenuLink { venue: String, item: String },

    /// A venue features a variation that does not exist
    #[error("venue {venue} features unknown variation {variation}")]
    UnknownFeatured { venue: String, variation: String },

    /// A venue features a variation served somewhere else
    #[error("venue {venue} features variation {variation} served at {served_at}")]
    FeaturedElsewhere {
        venue: String,
        variation: String,
        served_at: String,
    },
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

pub type DataResult<T> = Result<T, DataError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
