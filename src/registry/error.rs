//! Order board error types

use crate::model::OrderId;
use std::fmt;

/// Errors that can occur while operating the order board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A mandatory request field was absent
    MissingField(String),

    /// No live order carries the given identifier
    OrderNotFound(OrderId),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingField(field) => write!(f, "Missing field: {}", field),
            BoardError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
        }
    }
}

impl std::error::Error for BoardError {}
