//! Cost calculation: wear rate and repair price for a held item.
//!
//! Pure functions over [`HeldItem`] and [`PricingTable`]; quoting never
//! mutates anything. A quote is recomputed on every request and is not
//! cached across calls, so a confirm always prices the current item state.

use super::errors::MendError;
use super::pricing::PricingTable;
use super::types::{HeldItem, ItemCategory};

/// A computed, non-persisted price for fully repairing one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Percent of durability consumed, rounded to one decimal.
    pub wear_rate: f64,
    /// Total repair cost, rounded to two decimals and capped at max-cost.
    pub cost: f64,
    /// Category of the item the quote was computed for.
    pub category: ItemCategory,
}

/// Price the full repair of `item`.
///
/// Rejections, in evaluation order: [`MendError::InvalidItem`] for items
/// with no damageable state, [`MendError::AlreadyFull`] for undamaged items,
/// [`MendError::BelowThreshold`] when wear is under the configured minimum.
pub fn quote(item: &HeldItem, table: &PricingTable) -> Result<Quote, MendError> {
    if item.max_durability == 0 {
        return Err(MendError::InvalidItem);
    }
    if item.damage == 0 {
        return Err(MendError::AlreadyFull);
    }

    // One-decimal percent, rounded half-up.
    let wear_rate =
        ((item.damage as f64 / item.max_durability as f64) * 1000.0).round() / 10.0;

    let min_wear_rate = table.min_wear_rate();
    if wear_rate < min_wear_rate as f64 {
        return Err(MendError::BelowThreshold {
            wear_rate,
            min_wear_rate,
        });
    }

    let mut raw_cost = table.base_cost(item.category);
    for (enchant, level) in &item.enchantments {
        raw_cost += table.enchant_cost(enchant, *level);
    }

    // wear_rate stays a percentage here and the trailing /100 rescales it
    // after rounding; both stages are part of the published price formula.
    let cost = ((wear_rate * raw_cost).round() / 100.0).min(table.max_cost());

    Ok(Quote {
        wear_rate,
        cost,
        category: item.category,
    })
}
