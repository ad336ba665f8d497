use serde::{Deserialize, Serialize};

use cellar_inventory::Inventory;
use cellar_sales::Order;

/// Delivery status lifecycle.
///
/// Every order starts `Pending` and ends in exactly one terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    /// The order or the inventory was missing a required field.
    Invalid,
    /// The inventory cannot cover the order.
    Unfulfilled,
    /// Inventory was decremented by the order.
    Fulfilled,
}

impl DeliveryStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, DeliveryStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Invalid => "invalid",
            DeliveryStatus::Unfulfilled => "unfulfilled",
            DeliveryStatus::Fulfilled => "fulfilled",
        }
    }
}

impl core::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of processing one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    /// The order exactly as submitted.
    pub order: Order,
    pub delivery_status: DeliveryStatus,
    /// Inventory after the order shipped; only present when fulfilled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
}

impl DeliveryOutcome {
    pub(crate) fn pending(order: &Order) -> Self {
        Self {
            order: order.clone(),
            delivery_status: DeliveryStatus::Pending,
            inventory: None,
        }
    }

    pub(crate) fn finish(mut self, status: DeliveryStatus) -> Self {
        debug_assert!(status.is_terminal());
        self.delivery_status = status;
        self
    }

    pub(crate) fn fulfilled(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self.finish(DeliveryStatus::Fulfilled)
    }
}
