//! Collaborators injected into the order board at construction.
//!
//! The board itself only orchestrates: what counts as a complete request,
//! where identifiers come from and how a validated request becomes a stored
//! record are all decided by these three collaborators. Standard
//! implementations live in the bootstrap module; tests and embedders can
//! substitute their own.

use super::error::BoardError;
use crate::model::{OrderDetails, OrderId, OrderRequest, ValidatedRequest};

/// Checks an incoming request before any state is touched.
pub trait RequestValidator: Send + Sync {
    /// Returns the request with its mandatory fields proven present, or the
    /// reason it was rejected. Called once per registration, before any
    /// mutation.
    fn validate(&self, request: &OrderRequest) -> Result<ValidatedRequest, BoardError>;
}

/// Supplies the identifier for each newly registered order.
pub trait IdentifierSource: Send + Sync {
    /// Returns a fresh identifier. The board trusts the source never to
    /// repeat one and does not re-check.
    fn next_id(&self) -> OrderId;
}

/// Builds the stored record from a validated request.
pub trait RequestAdapter: Send + Sync {
    /// Pure, stateless transform; has no failure mode.
    fn to_details(&self, id: OrderId, request: ValidatedRequest) -> OrderDetails;
}
