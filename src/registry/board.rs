//! Core OrderBoard implementation composing the order store and the
//! per-side aggregates

use super::aggregate::{PriceLevelAggregate, SortDirection};
use super::collaborators::{IdentifierSource, RequestAdapter, RequestValidator};
use super::store::OrderStore;
use crate::model::Side;

/// The OrderBoard keeps every live order for one commodity together with a
/// per-side price level aggregation, serving registrations, lookups,
/// cancellations and summaries concurrently with no external locking.
///
/// A register or cancel call updates the order store and the matching
/// side's aggregate as two separate steps. There is no cross-structure
/// atomicity: a summary taken concurrently may observe the store update
/// without the aggregate update, or the reverse. The window is narrow and
/// accepted; each per-key operation on either structure is itself
/// linearizable.
pub struct OrderBoard {
    /// The commodity this board trades
    pub(super) commodity: String,

    /// All live orders keyed by identifier
    pub(super) orders: OrderStore,

    /// Buy side totals, presented highest price first
    pub(super) buy_levels: PriceLevelAggregate,

    /// Sell side totals, presented lowest price first
    pub(super) sell_levels: PriceLevelAggregate,

    /// Checks each request before anything is stored
    pub(super) validator: Box<dyn RequestValidator>,

    /// Supplies one fresh identifier per registration
    pub(super) id_source: Box<dyn IdentifierSource>,

    /// Builds the stored record from a validated request
    pub(super) adapter: Box<dyn RequestAdapter>,
}

impl OrderBoard {
    /// Create a new board for the given commodity with the supplied
    /// collaborators.
    ///
    /// `standard_board` wires the standard set for callers that do not need
    /// custom behavior.
    pub fn new(
        commodity: &str,
        validator: Box<dyn RequestValidator>,
        id_source: Box<dyn IdentifierSource>,
        adapter: Box<dyn RequestAdapter>,
    ) -> Self {
        Self {
            commodity: commodity.to_string(),
            orders: OrderStore::new(),
            buy_levels: PriceLevelAggregate::new(SortDirection::for_side(Side::Buy)),
            sell_levels: PriceLevelAggregate::new(SortDirection::for_side(Side::Sell)),
            validator,
            id_source,
            adapter,
        }
    }

    /// Get the commodity this board trades
    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    /// Number of live orders across both sides
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Whether the board holds no live orders
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of price levels known on one side, zero totals included
    pub fn level_count(&self, side: Side) -> usize {
        self.side_levels(side).len()
    }

    /// The aggregate tracking the given side
    pub(super) fn side_levels(&self, side: Side) -> &PriceLevelAggregate {
        match side {
            Side::Buy => &self.buy_levels,
            Side::Sell => &self.sell_levels,
        }
    }
}
