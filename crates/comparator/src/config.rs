//! Comparator configuration.
//!
//! Everything has a default matching the stock publisher pages, so an empty
//! TOML document is a valid configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use field_diff::{DiffAlgorithm, DiffGranularity, DEFAULT_EDIT_COST};
use log::debug;
use serde::Deserialize;

/// Top level comparator configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparatorConfig {
    /// Equalities shorter than this many characters between edits are folded into the edits
    pub edit_cost: usize,

    /// Upper bound on time spent diffing a single field, 0 disables the bound
    pub timeout_ms: u64,

    /// Diff algorithm
    pub algorithm: DiffAlgorithm,

    /// Token size the texts are compared by
    pub granularity: DiffGranularity,

    /// Toggle button labels
    pub labels: Labels,

    /// CSS selectors locating field containers and their regions
    pub selectors: SelectorConfig,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            edit_cost: DEFAULT_EDIT_COST,
            timeout_ms: 1000,
            algorithm: DiffAlgorithm::Myers,
            granularity: DiffGranularity::Char,
            labels: Labels::default(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl ComparatorConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("invalid comparator configuration")
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading comparator config from {}", path.display());
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }

    /// The diff timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Labels of the show/hide changes button
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    /// Shown while the historical text is displayed
    pub show: String,
    /// Shown while the diffs are displayed
    pub hide: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show: "Show changes".to_string(),
            hide: "Hide changes".to_string(),
        }
    }
}

/// CSS selectors describing the page structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    pub container: String,
    pub current: String,
    pub history: String,
    pub diff: String,
    /// Marker inside a region that excludes it from comparison
    pub dont_compare: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: ".field-container".to_string(),
            current: "span.object".to_string(),
            history: "span.history-object".to_string(),
            diff: "span.show-diff".to_string(),
            dont_compare: ".dont-compare".to_string(),
        }
    }
}
