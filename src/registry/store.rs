//! Storage of live orders keyed by identifier

use super::error::BoardError;
use crate::model::{OrderDetails, OrderId};
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrent store of all live orders, keyed by their identifier.
///
/// Identifier uniqueness is the only structural invariant; the identifier
/// source is trusted to avoid collisions, so insertion never checks for a
/// prior entry. The store is never iterated as a collection.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: DashMap<OrderId, Arc<OrderDetails>>,
}

impl OrderStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
        }
    }

    /// Stores a freshly registered order under its own identifier
    pub fn insert(&self, details: Arc<OrderDetails>) {
        self.orders.insert(details.id, details);
    }

    /// Looks up a live order by identifier
    pub fn get(&self, id: OrderId) -> Result<Arc<OrderDetails>, BoardError> {
        self.orders
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| BoardError::OrderNotFound(id))
    }

    /// Atomically removes and returns a live order.
    ///
    /// Either the removal succeeds and the record is returned, or nothing
    /// changes and `OrderNotFound` is returned; no partial removal is ever
    /// observable.
    pub fn remove(&self, id: OrderId) -> Result<Arc<OrderDetails>, BoardError> {
        self.orders
            .remove(&id)
            .map(|(_, details)| details)
            .ok_or_else(|| BoardError::OrderNotFound(id))
    }

    /// Number of live orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders are live
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
