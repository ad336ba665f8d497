use tracing::{debug, error, info, info_span, warn};

use cellar_core::{DomainError, DomainResult};
use cellar_inventory::{Inventory, Stock};
use cellar_sales::{Order, ValidOrder};

use crate::audit::{OrderLog, TracingOrderLog};
use crate::status::{DeliveryOutcome, DeliveryStatus};

/// Check an order for missing fields.
pub fn validate_order(order: &Order) -> DomainResult<ValidOrder> {
    let valid = order.validate()?;
    debug!(lines = valid.lines().len(), "order is complete");
    Ok(valid)
}

/// Check an inventory snapshot for missing fields.
pub fn validate_inventory(inventory: &Inventory) -> DomainResult<Stock> {
    let stock = inventory.validate()?;
    debug!(lines = stock.lines().len(), "inventory is complete");
    Ok(stock)
}

/// Decide whether `stock` can cover `order`.
///
/// Every item the order names needs one inventory entry holding at least the
/// total quantity requested for it across all lines, and the order total must
/// not exceed the inventory total.
pub fn check_feasibility(order: &ValidOrder, stock: &Stock) -> DomainResult<()> {
    for (name, requested) in order.demand() {
        if stock.covering(name, requested).is_some() {
            continue;
        }
        return Err(match stock.available(name) {
            None => DomainError::unfulfillable(format!("`{name}` is not stocked")),
            Some(available) => DomainError::unfulfillable(format!(
                "`{name}`: requested {requested}, available {available}"
            )),
        });
    }

    if order.total_price() > stock.total_price() {
        return Err(DomainError::unfulfillable(format!(
            "order total {} exceeds inventory total {}",
            order.total_price(),
            stock.total_price()
        )));
    }

    Ok(())
}

/// Produce the snapshot left after shipping `order` out of `stock`.
///
/// Each named item loses the requested quantity and the inventory total loses
/// the order total. `stock` itself is not modified.
pub fn apply_inventory_update(order: &ValidOrder, stock: &Stock) -> DomainResult<Stock> {
    stock.withdraw(&order.demand(), order.total_price())
}

/// Runs orders through validation, feasibility and inventory update.
#[derive(Debug, Clone, Default)]
pub struct OrderProcessor<L = TracingOrderLog> {
    log: L,
}

impl OrderProcessor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: OrderLog> OrderProcessor<L> {
    pub fn with_log(log: L) -> Self {
        Self { log }
    }

    pub fn order_log(&self) -> &L {
        &self.log
    }

    /// Process one order against one inventory snapshot.
    ///
    /// Never fails: every problem ends up as a terminal [`DeliveryStatus`].
    /// Neither input is modified; the post-order snapshot is returned in the
    /// outcome when the order is fulfilled.
    pub fn process(&self, order: &Order, inventory: &Inventory) -> DeliveryOutcome {
        let customer = order.customer_name.as_deref().unwrap_or("<missing>");
        let span = info_span!("process_order", customer);
        let _guard = span.enter();

        let outcome = DeliveryOutcome::pending(order);

        let valid = match validate_order(order) {
            Ok(valid) => valid,
            Err(err) => return reject(outcome, DeliveryStatus::Invalid, "order", &err),
        };

        let stock = match validate_inventory(inventory) {
            Ok(stock) => stock,
            Err(err) => return reject(outcome, DeliveryStatus::Invalid, "inventory", &err),
        };

        if let Err(err) = check_feasibility(&valid, &stock) {
            return reject(outcome, DeliveryStatus::Unfulfilled, "feasibility", &err);
        }

        let remaining = match apply_inventory_update(&valid, &stock) {
            Ok(remaining) => remaining,
            Err(err) => {
                error!(error = %err, "inventory update failed after feasibility passed");
                return outcome.finish(DeliveryStatus::Unfulfilled);
            }
        };

        self.log.log_order(&valid);

        info!(
            status = %DeliveryStatus::Fulfilled,
            remaining_total = remaining.total_price(),
            "order processed"
        );
        outcome.fulfilled(remaining.into())
    }
}

fn reject(
    outcome: DeliveryOutcome,
    status: DeliveryStatus,
    stage: &'static str,
    err: &DomainError,
) -> DeliveryOutcome {
    warn!(%status, stage, reason = %err, "order rejected");
    outcome.finish(status)
}
