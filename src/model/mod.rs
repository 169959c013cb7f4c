//! Domain model for the live order board: order sides, order identity and
//! the request/record types that flow through registration.

mod order;
mod side;

pub use order::{OrderDetails, OrderId, OrderRequest, ValidatedRequest};
pub use side::{ParseSideError, Side};
