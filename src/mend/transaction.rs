//! Transaction execution: the only component with side effects.
//!
//! One successful call performs exactly one debit and one full-durability
//! reset; every failure path leaves both the account and the item untouched,
//! with one deliberate exception: a backend failure *after* the withdrawal
//! is surfaced as [`MendError::Reconciliation`] and logged as a critical
//! operational event, because account and item are then inconsistent.

use log::error;

use super::errors::MendError;
use super::quote::Quote;
use super::types::HeldItem;
use crate::providers::{EconomyProvider, InventoryProvider};

/// Proof of a completed repair transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Amount actually withdrawn.
    pub cost: f64,
}

/// Withdraw the quoted cost and restore the held item, in that order.
///
/// The balance is re-read here rather than reused from quote time; nothing
/// is cached across the quote/confirm boundary. The withdrawal strictly
/// precedes the item mutation: the economy backend can recover a stray
/// debit, a regenerated item cannot be un-repaired.
pub fn execute(
    player: &str,
    mut item: HeldItem,
    quote: &Quote,
    economy: &mut dyn EconomyProvider,
    inventory: &mut dyn InventoryProvider,
) -> Result<Receipt, MendError> {
    let balance = economy
        .balance(player)
        .map_err(|e| MendError::Provider(e.to_string()))?;
    if balance < quote.cost {
        return Err(MendError::InsufficientFunds);
    }

    economy
        .withdraw(player, quote.cost)
        .map_err(|e| MendError::Provider(e.to_string()))?;

    item.repair_fully();
    if let Err(e) = inventory.set_held_item(player, item) {
        // Past the withdrawal; this is an inconsistency, not a rejection.
        error!(
            "reconciliation required: {} was charged {} but the repaired item could not be written back: {}",
            player, quote.cost, e
        );
        return Err(MendError::Reconciliation(e.to_string()));
    }

    Ok(Receipt { cost: quote.cost })
}
