//! Repair pricing and transaction core.
//!
//! Layering, leaves first: [`pricing`] holds the immutable cost tables,
//! [`quote`] derives wear and price from a held item, [`command`] gates the
//! quote/confirm protocol, and [`transaction`] is the single place funds and
//! durability actually change. [`messages`] renders every outcome into a
//! configured notice.

pub mod command;
pub mod errors;
pub mod messages;
pub mod pricing;
pub mod quote;
pub mod transaction;
pub mod types;

pub use command::{complete, handle_repair, wants_confirmation, RepairOutcome, CONFIRM_TOKEN};
pub use errors::MendError;
pub use messages::{format_cost, format_wear_rate, render, MessageCatalog};
pub use pricing::{PricingTable, BUILTIN_BASE_COST, BUILTIN_ENCHANT_TIERS};
pub use quote::{quote, Quote};
pub use transaction::{execute, Receipt};
pub use types::{HeldItem, ItemCategory, ENCHANT_LEVEL_MAX, ENCHANT_LEVEL_MIN};
