//! # Mender - item repair pricing and transactions
//!
//! Mender computes a monetary repair cost for a damaged item and, upon
//! confirmation and sufficient funds, atomically debits an account and fully
//! restores the item's durability.
//!
//! ## Features
//!
//! - **Deterministic pricing**: wear rate and cost are pure functions of the
//!   item, its enchantments, and an immutable pricing table.
//! - **Two-phase confirm**: a request never charges anything unless it
//!   carries the explicit confirm token; every invocation reprices the item
//!   as currently held, so confirms can never act on a stale quote.
//! - **Atomic execution**: one debit and one full-durability reset per
//!   successful transaction, nothing on any failure path; a backend failure
//!   after the withdrawal surfaces as a logged reconciliation error.
//! - **Pluggable backends**: economy and inventory live behind minimal
//!   traits with in-memory implementations for tests and the CLI.
//!
//! ## Quick Start
//!
//! ```rust
//! use mender::config::Config;
//! use mender::mend::{handle_repair, PricingTable, RepairOutcome};
//! use mender::mend::types::{HeldItem, ItemCategory};
//! use mender::providers::{MemoryEconomy, MemoryInventory};
//!
//! let config = Config::default();
//! let table = PricingTable::from_config(&config.pricing);
//!
//! let mut economy = MemoryEconomy::default();
//! economy.deposit("steve", 25000.0);
//! let mut inventory = MemoryInventory::default();
//! inventory.put("steve", HeldItem::new(ItemCategory::Sword, 500, 1000));
//!
//! // First call: quote only, nothing is charged.
//! let outcome = handle_repair("steve", &[], &table, &mut economy, &mut inventory).unwrap();
//! assert!(matches!(outcome, RepairOutcome::Quoted(_)));
//!
//! // Second call carries the confirm token and executes the transaction.
//! let outcome =
//!     handle_repair("steve", &["confirm"], &table, &mut economy, &mut inventory).unwrap();
//! assert!(matches!(outcome, RepairOutcome::Repaired(_)));
//! ```
//!
//! ## Module Organization
//!
//! - [`mend`] - pricing table, cost calculator, confirm gate, and the
//!   transaction executor
//! - [`config`] - TOML configuration: pricing, messages, logging
//! - [`providers`] - economy/inventory collaborator traits and in-memory
//!   implementations

pub mod config;
pub mod mend;
pub mod providers;
