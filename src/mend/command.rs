//! Command surface: the two-step quote/confirm protocol.
//!
//! A request without the confirm token only ever returns a quote; a request
//! carrying it goes straight to the transaction. No state is kept between
//! the two calls — each invocation reprices the item as currently held, so
//! a confirm issued after the item changed transacts against the current
//! state, never a stale quote.

use super::errors::MendError;
use super::pricing::PricingTable;
use super::quote::{self, Quote};
use super::transaction::{self, Receipt};
use crate::providers::{EconomyProvider, InventoryProvider};

/// Literal first argument that turns a quote into a transaction attempt.
pub const CONFIRM_TOKEN: &str = "confirm";

/// Outcome of one repair invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RepairOutcome {
    /// A price was computed; nothing was charged.
    Quoted(Quote),
    /// Funds moved and the item was fully repaired.
    Repaired(Receipt),
}

/// True when the first argument is the confirm token (case-insensitive).
pub fn wants_confirmation(args: &[&str]) -> bool {
    args.first()
        .is_some_and(|arg| arg.eq_ignore_ascii_case(CONFIRM_TOKEN))
}

/// Tab completion: the confirm token is the only first-argument suggestion,
/// filtered by case-insensitive prefix. Later positions complete to nothing.
pub fn complete(args: &[&str]) -> Vec<String> {
    match args {
        [] => vec![CONFIRM_TOKEN.to_string()],
        [prefix] if CONFIRM_TOKEN.starts_with(prefix.to_ascii_lowercase().as_str()) => {
            vec![CONFIRM_TOKEN.to_string()]
        }
        _ => Vec::new(),
    }
}

/// Handle one repair request end to end.
pub fn handle_repair(
    player: &str,
    args: &[&str],
    table: &PricingTable,
    economy: &mut dyn EconomyProvider,
    inventory: &mut dyn InventoryProvider,
) -> Result<RepairOutcome, MendError> {
    if player.is_empty() {
        return Err(MendError::NotPlayer);
    }

    let item = inventory
        .held_item(player)
        .map_err(|e| MendError::Provider(e.to_string()))?
        .ok_or(MendError::EmptyHand)?;

    let quote = quote::quote(&item, table)?;

    if !wants_confirmation(args) {
        return Ok(RepairOutcome::Quoted(quote));
    }

    let receipt = transaction::execute(player, item, &quote, economy, inventory)?;
    Ok(RepairOutcome::Repaired(receipt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_token_matches_case_insensitively() {
        assert!(wants_confirmation(&["confirm"]));
        assert!(wants_confirmation(&["CONFIRM"]));
        assert!(wants_confirmation(&["Confirm", "extra"]));
        assert!(!wants_confirmation(&[]));
        assert!(!wants_confirmation(&["yes"]));
        assert!(!wants_confirmation(&["confirmed"]));
    }

    #[test]
    fn completion_offers_the_token_for_matching_prefixes() {
        assert_eq!(complete(&[]), vec!["confirm".to_string()]);
        assert_eq!(complete(&["c"]), vec!["confirm".to_string()]);
        assert_eq!(complete(&["CONF"]), vec!["confirm".to_string()]);
        assert!(complete(&["x"]).is_empty());
        assert!(complete(&["confirm", "c"]).is_empty());
    }
}
