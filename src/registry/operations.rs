//! Board operations: registering, looking up, cancelling and summarising
//! orders

use super::board::OrderBoard;
use super::error::BoardError;
use super::summary::OrdersSummary;
use crate::model::{OrderDetails, OrderId, OrderRequest, Side};
use crate::utils::current_time_millis;
use std::sync::Arc;
use tracing::trace;

impl OrderBoard {
    /// Register a new order on the board.
    ///
    /// The request is validated first; when validation fails nothing is
    /// stored. On success the order is inserted into the store, its quantity
    /// is added to the matching side's price level and the assigned
    /// identifier is returned.
    pub fn register_order(&self, request: &OrderRequest) -> Result<OrderId, BoardError> {
        let validated = self.validator.validate(request)?;
        let id = self.id_source.next_id();
        let details = Arc::new(self.adapter.to_details(id, validated));
        trace!(
            "Order board {}: Registering order {} {} {} @ {}",
            self.commodity, id, details.side, details.quantity, details.price_per_unit
        );

        self.orders.insert(Arc::clone(&details));
        self.side_levels(details.side)
            .apply(details.price_per_unit, details.quantity);

        Ok(id)
    }

    /// Get the details of a live order
    pub fn order_details(&self, id: OrderId) -> Result<Arc<OrderDetails>, BoardError> {
        trace!("Order board {}: Looking up order {}", self.commodity, id);
        self.orders.get(id)
    }

    /// Cancel a live order and return its record.
    ///
    /// The order is removed from the store and its quantity deducted from
    /// the matching side's price level. Cancelling an unknown or already
    /// cancelled identifier fails with [`BoardError::OrderNotFound`] and
    /// changes nothing.
    pub fn cancel_order(&self, id: OrderId) -> Result<Arc<OrderDetails>, BoardError> {
        trace!("Order board {}: Cancelling order {}", self.commodity, id);
        let details = self.orders.remove(id)?;
        self.side_levels(details.side)
            .apply(details.price_per_unit, -details.quantity);
        Ok(details)
    }

    /// Summarise one side of the board: every known price level in the
    /// side's canonical order, stamped with the capture time
    pub fn order_summary(&self, side: Side) -> OrdersSummary {
        trace!("Order board {}: Summarising {} side", self.commodity, side);
        OrdersSummary {
            commodity: self.commodity.clone(),
            side,
            timestamp: current_time_millis(),
            levels: self.side_levels(side).snapshot(),
        }
    }
}
