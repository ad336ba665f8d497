//! Audit hook invoked once per fulfilled order.

use cellar_sales::ValidOrder;

/// Receives every order that was fulfilled.
///
/// Implementations must not fail the order; the inventory has already been
/// decremented by the time this is called.
pub trait OrderLog {
    fn log_order(&self, order: &ValidOrder);
}

/// Emits one structured `tracing` event per fulfilled order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOrderLog;

impl OrderLog for TracingOrderLog {
    fn log_order(&self, order: &ValidOrder) {
        tracing::info!(
            target: "cellar::audit",
            customer = order.customer_name(),
            lines = order.lines().len(),
            quantity = order.total_quantity(),
            total_price = order.total_price(),
            "order fulfilled"
        );
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOrderLog;

impl OrderLog for NoopOrderLog {
    fn log_order(&self, _order: &ValidOrder) {}
}

impl<L: OrderLog + ?Sized> OrderLog for &L {
    fn log_order(&self, order: &ValidOrder) {
        (**self).log_order(order)
    }
}

impl<L: OrderLog + ?Sized> OrderLog for Box<L> {
    fn log_order(&self, order: &ValidOrder) {
        (**self).log_order(order)
    }
}
