//! Order fulfillment: decide whether an inventory snapshot can satisfy an
//! order, and if so produce the snapshot left after shipping it.
//!
//! The pipeline is synchronous and pure apart from the [`OrderLog`] hook.

pub mod audit;
pub mod config;
pub mod processor;
pub mod status;

pub use audit::{NoopOrderLog, OrderLog, TracingOrderLog};
pub use config::{AuditMode, FulfillConfig};
pub use processor::{
    OrderProcessor, apply_inventory_update, check_feasibility, validate_inventory,
    validate_order,
};
pub use status::{DeliveryOutcome, DeliveryStatus};
