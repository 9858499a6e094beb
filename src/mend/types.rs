use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Enchantment levels outside this range are clamped before any price lookup.
pub const ENCHANT_LEVEL_MIN: u32 = 1;
pub const ENCHANT_LEVEL_MAX: u32 = 5;

/// Damage-capable item categories known to the pricing table.
///
/// The serialized `snake_case` name doubles as the `[pricing.item-cost]`
/// config key, see [`ItemCategory::key`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Sword,
    Axe,
    Pickaxe,
    Shovel,
    Hoe,
    Bow,
    Crossbow,
    Trident,
    FishingRod,
    Shears,
    FlintAndSteel,
    Shield,
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    Elytra,
}

impl ItemCategory {
    /// Config key used for base cost lookups.
    pub fn key(&self) -> &'static str {
        match self {
            ItemCategory::Sword => "sword",
            ItemCategory::Axe => "axe",
            ItemCategory::Pickaxe => "pickaxe",
            ItemCategory::Shovel => "shovel",
            ItemCategory::Hoe => "hoe",
            ItemCategory::Bow => "bow",
            ItemCategory::Crossbow => "crossbow",
            ItemCategory::Trident => "trident",
            ItemCategory::FishingRod => "fishing_rod",
            ItemCategory::Shears => "shears",
            ItemCategory::FlintAndSteel => "flint_and_steel",
            ItemCategory::Shield => "shield",
            ItemCategory::Helmet => "helmet",
            ItemCategory::Chestplate => "chestplate",
            ItemCategory::Leggings => "leggings",
            ItemCategory::Boots => "boots",
            ItemCategory::Elytra => "elytra",
        }
    }
}

/// The single item in a requester's hand, as reported by the inventory provider.
///
/// `max_durability == 0` marks an item that cannot take damage and therefore
/// cannot be mended. Invariant: `damage <= max_durability` whenever
/// `max_durability > 0`; [`HeldItem::validate`] checks it at ingestion
/// boundaries (player record load, inventory writes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct HeldItem {
    pub category: ItemCategory,
    pub damage: u32,
    pub max_durability: u32,
    /// Enchantment id -> level. Ordered map so cost summation order, and with
    /// it the floating-point total, is deterministic.
    #[serde(default)]
    pub enchantments: BTreeMap<String, u32>,
}

impl HeldItem {
    pub fn new(category: ItemCategory, damage: u32, max_durability: u32) -> Self {
        Self {
            category,
            damage,
            max_durability,
            enchantments: BTreeMap::new(),
        }
    }

    /// Builder-style enchantment attach, used by tests and seed data.
    pub fn with_enchantment(mut self, id: &str, level: u32) -> Self {
        self.enchantments.insert(id.to_string(), level);
        self
    }

    /// Check the durability bookkeeping invariant.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_durability > 0 && self.damage > self.max_durability {
            return Err(format!(
                "item damage {} exceeds max durability {}",
                self.damage, self.max_durability
            ));
        }
        Ok(())
    }

    pub fn is_damaged(&self) -> bool {
        self.damage > 0
    }

    /// Restore full durability.
    pub fn repair_fully(&mut self) {
        self.damage = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_damage_within_durability() {
        let item = HeldItem::new(ItemCategory::Sword, 500, 1000);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn validate_rejects_damage_over_durability() {
        let item = HeldItem::new(ItemCategory::Sword, 1001, 1000);
        assert!(item.validate().is_err());
    }

    #[test]
    fn validate_ignores_damage_on_unbreakable_items() {
        // max_durability 0 means "cannot be damaged"; stored damage is moot.
        let item = HeldItem::new(ItemCategory::Shield, 7, 0);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn repair_fully_clears_damage() {
        let mut item = HeldItem::new(ItemCategory::Pickaxe, 321, 1561);
        assert!(item.is_damaged());
        item.repair_fully();
        assert!(!item.is_damaged());
        assert_eq!(item.damage, 0);
    }

    #[test]
    fn category_key_round_trips_through_serde_name() {
        let toml = "category = \"fishing_rod\"\ndamage = 0\nmax-durability = 64\n";
        let item: HeldItem = toml::from_str(toml).unwrap();
        assert_eq!(item.category, ItemCategory::FishingRod);
        assert_eq!(item.category.key(), "fishing_rod");
    }
}
