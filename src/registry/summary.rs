//! Side summaries handed to board clients

use crate::model::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One price level of a side summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price per unit shared by every order aggregated into this level
    pub price: Decimal,

    /// Total live quantity across those orders
    pub total_quantity: Decimal,
}

/// A point-in-time view of one side of the board.
///
/// Levels are ordered in the side's canonical direction: lowest price first
/// for Sell, highest price first for Buy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersSummary {
    /// Commodity the board trades
    pub commodity: String,

    /// The summarised side
    pub side: Side,

    /// Timestamp when the summary was captured (milliseconds since epoch)
    pub timestamp: u64,

    /// Price levels in the side's canonical order
    pub levels: Vec<PriceLevel>,
}

impl OrdersSummary {
    /// The first, best-priced level, if the side has any
    pub fn best(&self) -> Option<&PriceLevel> {
        let best = self.levels.first();
        trace!("best: {:?}", best);
        best
    }

    /// Total quantity at a given price, if that level is known
    pub fn quantity_at(&self, price: Decimal) -> Option<Decimal> {
        self.levels
            .iter()
            .find(|level| level.price == price)
            .map(|level| level.total_quantity)
    }

    /// Sum of quantities across every level
    pub fn total_quantity(&self) -> Decimal {
        let total = self.levels.iter().map(|level| level.total_quantity).sum();
        trace!("total_quantity: {:?}", total);
        total
    }

    /// Number of price levels in the summary
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the side had no known price levels
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
