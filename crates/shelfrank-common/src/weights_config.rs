//! Weights configuration for product scoring.
//!
//! Loaded from `config/weights.yaml`. A missing or malformed file is not fatal:
//! the scorer falls back to an empty configuration and logs an error.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{error, info};

use crate::error::{Result, ShelfrankError};

/// Complete scoring configuration, immutable for the duration of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    /// Feature key → weight. Keys are matched against the derivable features;
    /// `brand_tier` is accepted as a name for `brand_tier_weight`.
    #[serde(default)]
    pub scoring_weights: BTreeMap<String, f64>,

    /// Brand tier label → tier weight.
    #[serde(default)]
    pub brand_tier_weights: HashMap<String, f64>,

    /// Business filters applied before normalisation
    #[serde(default)]
    pub filters: FilterConfig,

    /// Default number of products returned when the caller does not ask for a count
    #[serde(default = "default_top_n")]
    pub top_n_products: i64,
}

fn default_top_n() -> i64 { 10 }

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            scoring_weights: BTreeMap::new(),
            brand_tier_weights: HashMap::new(),
            filters: FilterConfig::default(),
            top_n_products: default_top_n(),
        }
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Inventory thresholds. An absent threshold disables that criterion entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Drop products with fewer units in stock than this
    #[serde(default)]
    pub min_stock: Option<i64>,

    /// Drop products that have sat in inventory longer than this many days
    #[serde(default)]
    pub max_inventory_days: Option<i64>,
}

impl FilterConfig {
    pub fn is_empty(&self) -> bool {
        self.min_stock.is_none() && self.max_inventory_days.is_none()
    }
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl WeightsConfig {
    /// Parse from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ShelfrankError::Config(e.to_string()))
    }

    /// Load from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ShelfrankError::SourceNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML file, falling back to an empty configuration on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_yaml(path) {
            Ok(config) => {
                info!("Loaded weights from {}", path.display());
                config
            }
            Err(ShelfrankError::SourceNotFound(_)) => {
                error!(
                    "Weights file not found at {}. Using default empty weights; scoring will be significantly affected.",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                error!(
                    "Error parsing weights file {}: {e}. Using default empty weights; scoring will be significantly affected.",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self).map_err(|e| ShelfrankError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Sum of all configured scoring weights. Not required to be 1.0.
    pub fn weight_sum(&self) -> f64 {
        self.scoring_weights.values().sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
scoring_weights:
  sales_velocity: 0.3
  profit_margin: 0.3
  engagement: 0.2
  brand_tier: 0.2
brand_tier_weights:
  A: 1.0
  B: 0.8
  C: 0.6
  D: 0.4
filters:
  min_stock: 10
  max_inventory_days: 90
top_n_products: 10
"#;

    #[test]
    fn test_shipped_weights_file_parses() {
        let shipped = include_str!("../../../config/weights.yaml");
        assert_eq!(
            WeightsConfig::from_yaml_str(shipped).unwrap(),
            WeightsConfig::from_yaml_str(SAMPLE).unwrap()
        );
    }

    #[test]
    fn test_parse_sample() {
        let config = WeightsConfig::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(config.scoring_weights.len(), 4);
        assert_eq!(config.brand_tier_weights.get("B"), Some(&0.8));
        assert_eq!(config.filters.min_stock, Some(10));
        assert_eq!(config.filters.max_inventory_days, Some(90));
        assert_eq!(config.top_n_products, 10);
        assert!((config.weight_sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_sections_default() {
        let config = WeightsConfig::from_yaml_str("scoring_weights:\n  engagement: 1.0\n").unwrap();
        assert!(config.brand_tier_weights.is_empty());
        assert!(config.filters.is_empty());
        assert_eq!(config.top_n_products, 10);
    }

    #[test]
    fn test_null_filter_is_disabled() {
        let config = WeightsConfig::from_yaml_str("filters:\n  min_stock: null\n  max_inventory_days: 30\n").unwrap();
        assert_eq!(config.filters.min_stock, None);
        assert_eq!(config.filters.max_inventory_days, Some(30));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = WeightsConfig::load_or_default(dir.path().join("weights.yaml"));
        assert_eq!(config, WeightsConfig::default());
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.yaml");
        std::fs::write(&path, "scoring_weights: [not, a, map").unwrap();
        let config = WeightsConfig::load_or_default(&path);
        assert_eq!(config, WeightsConfig::default());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.yaml");
        let config = WeightsConfig::from_yaml_str(SAMPLE).unwrap();
        config.to_yaml(&path).unwrap();
        let parsed = WeightsConfig::from_yaml(&path).unwrap();
        assert_eq!(config, parsed);
    }
}
