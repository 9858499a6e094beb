//! Pricing table: per-category base costs and enchantment cost curves.
//!
//! Built once from [`PricingConfig`] at startup and immutable afterwards.
//! Every lookup degrades to a configured or built-in default; none can fail.

use std::collections::HashMap;

use log::warn;

use super::types::{ItemCategory, ENCHANT_LEVEL_MAX, ENCHANT_LEVEL_MIN};
use crate::config::PricingConfig;

/// Base cost applied when the config carries no `default` entry at all.
pub const BUILTIN_BASE_COST: f64 = 10000.0;

/// Tier table (levels 1-5) used when the config has no default sequence.
pub const BUILTIN_ENCHANT_TIERS: [f64; 5] = [1000.0, 2000.0, 3000.0, 4000.0, 5000.0];

/// Immutable cost lookup built from the pricing section of the config.
#[derive(Debug, Clone)]
pub struct PricingTable {
    base_costs: HashMap<String, f64>,
    default_base_cost: f64,
    enchant_tiers: HashMap<String, [f64; 5]>,
    default_tiers: [f64; 5],
    min_wear_rate: u32,
    max_cost: f64,
}

impl PricingTable {
    pub fn from_config(cfg: &PricingConfig) -> Self {
        let default_base_cost = cfg
            .item_cost
            .get("default")
            .copied()
            .unwrap_or(BUILTIN_BASE_COST);
        if !cfg.item_cost.contains_key("default") {
            warn!(
                "pricing config has no item-cost.default entry; using {}",
                BUILTIN_BASE_COST
            );
        }

        let default_tiers = match cfg.enchant_cost.get("default") {
            Some(seq) => normalize_tiers(seq, &BUILTIN_ENCHANT_TIERS),
            None => BUILTIN_ENCHANT_TIERS,
        };

        let enchant_tiers = cfg
            .enchant_cost
            .iter()
            .filter(|(id, _)| id.as_str() != "default")
            .map(|(id, seq)| (id.clone(), normalize_tiers(seq, &default_tiers)))
            .collect();

        Self {
            base_costs: cfg.item_cost.clone(),
            default_base_cost,
            enchant_tiers,
            default_tiers,
            min_wear_rate: clamp_wear_rate(cfg.min_wear_rate),
            max_cost: cfg.max_cost,
        }
    }

    /// Base cost for a category, falling back to the `default` entry.
    pub fn base_cost(&self, category: ItemCategory) -> f64 {
        self.base_costs
            .get(category.key())
            .copied()
            .unwrap_or(self.default_base_cost)
    }

    /// Cost contribution of one enchantment at `level`.
    ///
    /// The level is clamped to `[1, 5]` before lookup. A per-enchantment
    /// override wins; otherwise the default tier sequence applies.
    pub fn enchant_cost(&self, enchant: &str, level: u32) -> f64 {
        let level = level.clamp(ENCHANT_LEVEL_MIN, ENCHANT_LEVEL_MAX);
        let idx = (level - 1) as usize;
        match self.enchant_tiers.get(enchant) {
            Some(tiers) => tiers[idx],
            None => self.default_tiers[idx],
        }
    }

    /// Minimum wear (percent) an item must reach to qualify for a repair.
    pub fn min_wear_rate(&self) -> u32 {
        self.min_wear_rate
    }

    /// Hard cap applied to every computed cost.
    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }
}

/// Stretch a configured tier sequence to exactly five levels, filling any
/// missing tail entries from `fallback`.
fn normalize_tiers(seq: &[f64], fallback: &[f64; 5]) -> [f64; 5] {
    let mut tiers = *fallback;
    for (i, cost) in seq.iter().take(5).enumerate() {
        tiers[i] = *cost;
    }
    tiers
}

/// Clamp the configured threshold into `[0, 100]` percent.
fn clamp_wear_rate(value: i64) -> u32 {
    if !(0..=100).contains(&value) {
        warn!("min-wear-rate {} is outside 0..=100; clamping", value);
    }
    value.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cfg: PricingConfig) -> PricingTable {
        PricingTable::from_config(&cfg)
    }

    #[test]
    fn base_cost_prefers_category_entry() {
        let mut cfg = PricingConfig::default();
        cfg.item_cost.insert("sword".to_string(), 12000.0);
        let table = table(cfg);
        assert_eq!(table.base_cost(ItemCategory::Sword), 12000.0);
        assert_eq!(table.base_cost(ItemCategory::Boots), 10000.0);
    }

    #[test]
    fn base_cost_survives_missing_default_entry() {
        let mut cfg = PricingConfig::default();
        cfg.item_cost.clear();
        let table = table(cfg);
        assert_eq!(table.base_cost(ItemCategory::Hoe), BUILTIN_BASE_COST);
    }

    #[test]
    fn enchant_cost_clamps_level_at_both_ends() {
        let table = table(PricingConfig::default());
        assert_eq!(table.enchant_cost("sharpness", 0), 1000.0);
        assert_eq!(table.enchant_cost("sharpness", 1), 1000.0);
        assert_eq!(table.enchant_cost("sharpness", 9), 5000.0);
    }

    #[test]
    fn enchant_cost_uses_override_then_default_tiers() {
        let mut cfg = PricingConfig::default();
        cfg.enchant_cost
            .insert("mending".to_string(), vec![9000.0, 9500.0]);
        let table = table(cfg);
        // Levels 1-2 come from the override, 3-5 from the default sequence.
        assert_eq!(table.enchant_cost("mending", 1), 9000.0);
        assert_eq!(table.enchant_cost("mending", 2), 9500.0);
        assert_eq!(table.enchant_cost("mending", 3), 3000.0);
        assert_eq!(table.enchant_cost("unbreaking", 4), 4000.0);
    }

    #[test]
    fn min_wear_rate_is_clamped_into_percent_range() {
        let mut cfg = PricingConfig::default();
        cfg.min_wear_rate = 250;
        assert_eq!(table(cfg).min_wear_rate(), 100);

        let mut cfg = PricingConfig::default();
        cfg.min_wear_rate = -5;
        assert_eq!(table(cfg).min_wear_rate(), 0);

        let mut cfg = PricingConfig::default();
        cfg.min_wear_rate = 10;
        assert_eq!(table(cfg).min_wear_rate(), 10);
    }
}
