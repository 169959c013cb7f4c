//! Order identity and the request/record types

use crate::model::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a registered order.
///
/// Wraps a UUID and displays/serializes as its hyphenated string form. An
/// identifier is assigned exactly once, at registration, and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Create a new random (v4) order id
    pub fn new() -> Self {
        OrderId(Uuid::new_v4())
    }

    /// The nil id; no identifier source ever produces it
    pub fn nil() -> Self {
        OrderId(Uuid::nil())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(OrderId)
    }
}

/// An incoming request to place an order on the board.
///
/// Every business field is optional at this boundary: requests arrive from
/// callers or deserialized payloads that may have omitted fields, and the
/// board's validator decides whether the request is complete. Quantity and
/// price are exact decimals; a positive quantity is expected but not
/// enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    /// Identifier of the user placing the order
    pub user_id: Option<String>,
    /// Quantity on offer or demand
    pub quantity: Option<Decimal>,
    /// Price per unit of the commodity
    pub price_per_unit: Option<Decimal>,
    /// Whether the order buys or sells
    pub side: Option<Side>,
}

impl OrderRequest {
    /// Build a fully populated request
    pub fn new(user_id: &str, quantity: Decimal, price_per_unit: Decimal, side: Side) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            quantity: Some(quantity),
            price_per_unit: Some(price_per_unit),
            side: Some(side),
        }
    }
}

/// A request whose mandatory fields have all been proven present.
///
/// Produced by request validation and consumed by the adapter that builds
/// the stored record, so everything downstream of the validation gate works
/// with plain values instead of `Option`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Identifier of the user placing the order
    pub user_id: String,
    /// Quantity on offer or demand
    pub quantity: Decimal,
    /// Price per unit of the commodity
    pub price_per_unit: Decimal,
    /// Whether the order buys or sells
    pub side: Side,
}

/// The immutable record of a live order.
///
/// Built once at registration and never modified afterwards; the board hands
/// out shared references, so callers cannot mutate the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Identifier assigned at registration
    pub id: OrderId,
    /// Identifier of the user who placed the order
    pub user_id: String,
    /// Quantity on offer or demand
    pub quantity: Decimal,
    /// Price per unit of the commodity
    pub price_per_unit: Decimal,
    /// Whether the order buys or sells
    pub side: Side,
}

impl fmt::Display for OrderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={};user_id={};quantity={};price_per_unit={};side={}",
            self.id, self.user_id, self.quantity, self.price_per_unit, self.side
        )
    }
}
