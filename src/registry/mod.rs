//! Live order board: concurrent registration, cancellation and per-side
//! price level summaries for one commodity.

pub mod board;

mod aggregate;
mod bootstrap;
mod collaborators;
mod error;
mod operations;
mod store;
mod summary;

pub use board::OrderBoard;
pub use bootstrap::{DetailsAdapter, FieldPresenceValidator, UuidIdSource, standard_board};
pub use collaborators::{IdentifierSource, RequestAdapter, RequestValidator};
pub use error::BoardError;
pub use summary::{OrdersSummary, PriceLevel};
