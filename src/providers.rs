//! External collaborator interfaces consumed by the repair core.
//!
//! The economy and inventory backends are owned elsewhere; the core only
//! needs the minimal capabilities below. In-memory implementations ship here
//! so the core can be exercised without any real backend, and a TOML-backed
//! [`PlayerRecord`] stands in for both providers in the CLI.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::mend::types::{HeldItem, ItemCategory};

/// Failure reported by an external backend.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// Payment backend: a single numeric balance per player.
pub trait EconomyProvider {
    fn balance(&self, player: &str) -> Result<f64, ProviderError>;
    fn withdraw(&mut self, player: &str, amount: f64) -> Result<(), ProviderError>;
}

/// Held-item access for a player.
pub trait InventoryProvider {
    fn held_item(&self, player: &str) -> Result<Option<HeldItem>, ProviderError>;
    fn set_held_item(&mut self, player: &str, item: HeldItem) -> Result<(), ProviderError>;
}

// ============================================================================
// In-memory providers
// ============================================================================

/// In-memory economy used by tests and the CLI. Unknown players read as 0.
#[derive(Debug, Clone, Default)]
pub struct MemoryEconomy {
    balances: HashMap<String, f64>,
}

impl MemoryEconomy {
    pub fn deposit(&mut self, player: &str, amount: f64) {
        *self.balances.entry(player.to_string()).or_insert(0.0) += amount;
    }

    pub fn balance_of(&self, player: &str) -> f64 {
        self.balances.get(player).copied().unwrap_or(0.0)
    }
}

impl EconomyProvider for MemoryEconomy {
    fn balance(&self, player: &str) -> Result<f64, ProviderError> {
        Ok(self.balance_of(player))
    }

    fn withdraw(&mut self, player: &str, amount: f64) -> Result<(), ProviderError> {
        let balance = self.balances.entry(player.to_string()).or_insert(0.0);
        if *balance < amount {
            return Err(ProviderError(format!(
                "balance {} cannot cover withdrawal of {}",
                balance, amount
            )));
        }
        *balance -= amount;
        Ok(())
    }
}

/// In-memory single-slot inventory keyed by player.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    held: HashMap<String, HeldItem>,
}

impl MemoryInventory {
    pub fn put(&mut self, player: &str, item: HeldItem) {
        self.held.insert(player.to_string(), item);
    }

    pub fn get(&self, player: &str) -> Option<HeldItem> {
        self.held.get(player).cloned()
    }
}

impl InventoryProvider for MemoryInventory {
    fn held_item(&self, player: &str) -> Result<Option<HeldItem>, ProviderError> {
        Ok(self.get(player))
    }

    fn set_held_item(&mut self, player: &str, item: HeldItem) -> Result<(), ProviderError> {
        item.validate().map_err(ProviderError)?;
        self.held.insert(player.to_string(), item);
        Ok(())
    }
}

// ============================================================================
// File-backed player record (CLI stand-in for the external providers)
// ============================================================================

/// One player's externally-owned state: balance plus the held item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct PlayerRecord {
    pub username: String,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held_item: Option<HeldItem>,
}

impl PlayerRecord {
    /// Load a player record, checking the item durability invariant.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read player file {}", path.display()))?;
        let record: PlayerRecord = toml::from_str(&content)
            .with_context(|| format!("failed to parse player file {}", path.display()))?;
        if let Some(item) = &record.held_item {
            item.validate()
                .map_err(|e| anyhow!("corrupt player file {}: {}", path.display(), e))?;
        }
        Ok(record)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "failed to serialize player record".to_string())?;
        fs::write(path, content)
            .with_context(|| format!("failed to write player file {}", path.display()))?;
        Ok(())
    }

    /// Starter record written by `mender init`.
    pub fn starter() -> Self {
        Self {
            username: "steve".to_string(),
            balance: 25000.0,
            held_item: Some(
                HeldItem::new(ItemCategory::Sword, 780, 1561).with_enchantment("sharpness", 3),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_economy_rejects_overdraft() {
        let mut economy = MemoryEconomy::default();
        economy.deposit("alex", 50.0);
        assert!(economy.withdraw("alex", 80.0).is_err());
        assert_eq!(economy.balance_of("alex"), 50.0);
        assert!(economy.withdraw("alex", 50.0).is_ok());
        assert_eq!(economy.balance_of("alex"), 0.0);
    }

    #[test]
    fn unknown_players_have_zero_balance() {
        let economy = MemoryEconomy::default();
        assert_eq!(economy.balance("nobody").unwrap(), 0.0);
    }

    #[test]
    fn memory_inventory_rejects_invariant_violations() {
        let mut inventory = MemoryInventory::default();
        let bad = HeldItem::new(ItemCategory::Sword, 2000, 1000);
        assert!(inventory.set_held_item("alex", bad).is_err());
        assert!(inventory.get("alex").is_none());
    }

    #[test]
    fn starter_record_round_trips_through_toml() {
        let record = PlayerRecord::starter();
        let toml = toml::to_string_pretty(&record).unwrap();
        let parsed: PlayerRecord = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, record);
    }
}
