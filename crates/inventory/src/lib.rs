//! Inventory domain module.
//!
//! This crate contains the inventory snapshot an order is checked against,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Snapshots are never edited in place; withdrawing stock yields a new one.

pub mod snapshot;

pub use snapshot::{Inventory, InventoryItem, Stock, StockLine};
