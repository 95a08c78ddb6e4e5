// SPDX-License-Identifier: PMPL-1.0-or-later

//! Machine-readable output of query results

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Coloured text for a terminal
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }

    /// Serialize `value` for the structured formats. Text output goes
    /// through [`CatalogFormatter`](super::CatalogFormatter) instead, so
    /// `Text` falls back to JSON here.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}
