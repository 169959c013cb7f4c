//! Standard collaborator implementations and board wiring

use super::board::OrderBoard;
use super::collaborators::{IdentifierSource, RequestAdapter, RequestValidator};
use super::error::BoardError;
use crate::model::{OrderDetails, OrderId, OrderRequest, ValidatedRequest};
use crate::utils::UuidGenerator;
use uuid::Uuid;

/// Validator requiring every business field of a request to be present.
///
/// The first absent field fails the request, named in the error.
#[derive(Debug, Default)]
pub struct FieldPresenceValidator;

impl RequestValidator for FieldPresenceValidator {
    fn validate(&self, request: &OrderRequest) -> Result<ValidatedRequest, BoardError> {
        let user_id = request
            .user_id
            .clone()
            .ok_or_else(|| BoardError::MissingField("user_id".to_string()))?;
        let quantity = request
            .quantity
            .ok_or_else(|| BoardError::MissingField("quantity".to_string()))?;
        let price_per_unit = request
            .price_per_unit
            .ok_or_else(|| BoardError::MissingField("price_per_unit".to_string()))?;
        let side = request
            .side
            .ok_or_else(|| BoardError::MissingField("side".to_string()))?;

        Ok(ValidatedRequest {
            user_id,
            quantity,
            price_per_unit,
            side,
        })
    }
}

/// Identifier source producing sequential v5 UUIDs from a per-instance
/// namespace.
#[derive(Debug)]
pub struct UuidIdSource {
    generator: UuidGenerator,
}

impl UuidIdSource {
    /// A source with a random namespace, unique to this instance
    pub fn new() -> Self {
        Self::with_namespace(Uuid::new_v4())
    }

    /// A source with a caller-chosen namespace. Two sources sharing a
    /// namespace produce the same id sequence, which keeps tests
    /// reproducible.
    pub fn with_namespace(namespace: Uuid) -> Self {
        Self {
            generator: UuidGenerator::new(namespace),
        }
    }
}

impl Default for UuidIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSource for UuidIdSource {
    fn next_id(&self) -> OrderId {
        OrderId(self.generator.next())
    }
}

/// Adapter copying validated fields into the stored record.
#[derive(Debug, Default)]
pub struct DetailsAdapter;

impl RequestAdapter for DetailsAdapter {
    fn to_details(&self, id: OrderId, request: ValidatedRequest) -> OrderDetails {
        OrderDetails {
            id,
            user_id: request.user_id,
            quantity: request.quantity,
            price_per_unit: request.price_per_unit,
            side: request.side,
        }
    }
}

/// A board for the given commodity wired with the standard collaborators
pub fn standard_board(commodity: &str) -> OrderBoard {
    OrderBoard::new(
        commodity,
        Box::new(FieldPresenceValidator),
        Box::new(UuidIdSource::new()),
        Box::new(DetailsAdapter),
    )
}
