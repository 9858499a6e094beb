//! Configuration management for the repair service.
//!
//! A single TOML file carries three sections:
//!
//! - `[pricing]` - wear threshold, cost cap, per-category base costs, and
//!   enchantment tier tables
//! - `[messages]` - notice templates with `%token%` substitution
//! - `[logging]` - log level
//!
//! The file is parsed once at startup into an immutable [`Config`]; a reload
//! replaces the whole structure, it is never patched in place while a
//! request is in flight. Missing keys fall back to the same defaults
//! [`Config::create_default`] writes out.
//!
//! ```toml
//! [pricing]
//! min-wear-rate = 1
//! max-cost = 50000.0
//!
//! [pricing.item-cost]
//! default = 10000.0
//! sword = 12000.0
//!
//! [pricing.enchant-cost]
//! default = [1000.0, 2000.0, 3000.0, 4000.0, 5000.0]
//!
//! [messages]
//! notify-cost = "Mending costs %cost%."
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Pricing knobs: thresholds, caps, per-category and per-enchant costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PricingConfig {
    /// Minimum wear (percent) an item must reach to qualify for a repair.
    /// Values outside 0..=100 are clamped when the pricing table is built.
    #[serde(default = "default_min_wear_rate")]
    pub min_wear_rate: i64,
    /// Hard cap applied to every computed cost.
    #[serde(default = "default_max_cost")]
    pub max_cost: f64,
    /// Base cost per category key; the `default` entry backs all others.
    #[serde(default = "default_item_cost")]
    pub item_cost: HashMap<String, f64>,
    /// Cost tiers (levels 1-5) per enchantment id; the `default` sequence
    /// backs any enchantment without an override.
    #[serde(default = "default_enchant_cost")]
    pub enchant_cost: HashMap<String, Vec<f64>>,
}

fn default_min_wear_rate() -> i64 {
    1
}

fn default_max_cost() -> f64 {
    50000.0
}

fn default_item_cost() -> HashMap<String, f64> {
    let mut costs = HashMap::new();
    costs.insert("default".to_string(), 10000.0);
    costs
}

fn default_enchant_cost() -> HashMap<String, Vec<f64>> {
    let mut tiers = HashMap::new();
    tiers.insert(
        "default".to_string(),
        vec![1000.0, 2000.0, 3000.0, 4000.0, 5000.0],
    );
    tiers
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_wear_rate: default_min_wear_rate(),
            max_cost: default_max_cost(),
            item_cost: default_item_cost(),
            enchant_cost: default_enchant_cost(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Notice templates keyed by message id; unset keys use built-ins.
    #[serde(default)]
    pub messages: HashMap<String, String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("failed to parse config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Create a default configuration file.
    pub fn create_default(path: &Path) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("failed to serialize default config: {}", e))?;
        fs::write(path, content)
            .map_err(|e| anyhow!("failed to write config file {}: {}", path.display(), e))?;
        Ok(())
    }
}
