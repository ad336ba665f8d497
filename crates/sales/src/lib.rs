//! Purchase orders domain module.
//!
//! This crate holds the order model as received from a customer and its
//! validated form, implemented purely as deterministic domain logic
//! (no IO, no logging setup).

pub mod order;

pub use order::{LineItem, Order, OrderLine, ValidOrder};
