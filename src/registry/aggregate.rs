//! Per-side running totals by price level

use super::summary::PriceLevel;
use crate::model::Side;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Ordering applied to price levels when a side is summarised.
///
/// Fixed when the aggregate is constructed and never re-derived per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lowest price first; the sell side's direction
    Ascending,
    /// Highest price first; the buy side's direction
    Descending,
}

impl SortDirection {
    /// The direction a side is presented in
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Buy => SortDirection::Descending,
            Side::Sell => SortDirection::Ascending,
        }
    }

    fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        match self {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        }
    }
}

/// Running quantity totals per price for one side of the board.
///
/// The backing map is keyed by exact decimal price, so `3.5` and `3.50` land
/// on the same level. An entry is created the first time a price is touched
/// and never removed afterwards: a fully cancelled level keeps its entry, at
/// zero, for the life of the aggregate.
#[derive(Debug)]
pub struct PriceLevelAggregate {
    /// Total live quantity per price
    totals: DashMap<Decimal, Decimal>,

    /// Presentation order of this side's levels
    direction: SortDirection,
}

impl PriceLevelAggregate {
    /// Creates an empty aggregate presented in the given direction
    pub fn new(direction: SortDirection) -> Self {
        Self {
            totals: DashMap::new(),
            direction,
        }
    }

    /// Adds `delta` to the running total at `price`, creating the level at
    /// zero on first use. A negative delta records a cancellation.
    ///
    /// The read-modify-write runs under the entry's shard write lock, so
    /// concurrent applies at the same price are never lost.
    pub fn apply(&self, price: Decimal, delta: Decimal) {
        *self.totals.entry(price).or_insert(Decimal::ZERO) += delta;
    }

    /// Point-in-time copy of every level, sorted in this side's direction.
    ///
    /// Later mutations of the aggregate are invisible through a snapshot
    /// already taken. Zero totals are included.
    pub fn snapshot(&self) -> Vec<PriceLevel> {
        let mut levels: Vec<PriceLevel> = self
            .totals
            .iter()
            .map(|item| PriceLevel {
                price: *item.key(),
                total_quantity: *item.value(),
            })
            .collect();
        levels.sort_by(|a, b| self.direction.compare(&a.price, &b.price));
        levels
    }

    /// Number of known price levels, zero totals included
    pub fn len(&self) -> usize {
        self.totals.len()
    }
}
